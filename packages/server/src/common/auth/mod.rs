/// Authorization for bot commands
///
/// ```rust
/// use relay_core::common::{Actor, AdminCapability, MemberId, ServerId};
///
/// let actor = Actor::new(MemberId::new(1), Some(ServerId::new(2)), false);
/// assert!(actor.can(AdminCapability::ManageChannels).check().is_err());
/// ```
mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::AdminCapability;
pub use errors::AuthError;
