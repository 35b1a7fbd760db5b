// Common types shared across the application

pub mod auth;
pub mod entity_ids;
pub mod errors;
pub mod id;

pub use auth::{Actor, AdminCapability, AuthError};
pub use entity_ids::*;
pub use errors::RelayError;
pub use id::Id;
