use super::{AdminCapability, AuthError};
use crate::common::entity_ids::{MemberId, ServerId};

/// Entry point for authorization checks
///
/// Usage:
/// ```
/// use relay_core::common::{Actor, AdminCapability, MemberId, ServerId};
///
/// let actor = Actor::new(MemberId::new(1), Some(ServerId::new(2)), true);
/// let server_id = actor.can(AdminCapability::TriggerRelay).check().unwrap();
/// assert_eq!(server_id, ServerId::new(2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    member_id: MemberId,
    server_id: Option<ServerId>,
    is_admin: bool,
}

impl Actor {
    /// Create a new actor for authorization checks
    ///
    /// # Arguments
    /// * `member_id` - The member issuing the command
    /// * `server_id` - The server the command was sent in (`None` for direct messages)
    /// * `is_admin` - Administrator permission resolved by the chat platform
    pub fn new(member_id: MemberId, server_id: Option<ServerId>, is_admin: bool) -> Self {
        Self {
            member_id,
            server_id,
            is_admin,
        }
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: AdminCapability) -> CapabilityBuilder {
        CapabilityBuilder {
            actor: self,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    actor: Actor,
    capability: AdminCapability,
}

impl CapabilityBuilder {
    /// Perform the authorization check, returning the server it applies to
    pub fn check(self) -> Result<ServerId, AuthError> {
        let server_id = self.actor.server_id.ok_or(AuthError::ServerRequired)?;

        if self.capability.requires_admin() && !self.actor.is_admin {
            tracing::debug!(
                member_id = %self.actor.member_id,
                server_id = %server_id,
                capability = ?self.capability,
                "Admin capability denied"
            );
            return Err(AuthError::AdminRequired);
        }

        Ok(server_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_check() {
        let result = Actor::new(MemberId::new(1), Some(ServerId::new(10)), true)
            .can(AdminCapability::ManageChannels)
            .check();

        assert_eq!(result.unwrap(), ServerId::new(10));
    }

    #[test]
    fn test_non_admin_rejected() {
        let result = Actor::new(MemberId::new(1), Some(ServerId::new(10)), false)
            .can(AdminCapability::TriggerRelay)
            .check();

        assert!(matches!(result, Err(AuthError::AdminRequired)));
    }

    #[test]
    fn test_direct_message_rejected() {
        let result = Actor::new(MemberId::new(1), None, true)
            .can(AdminCapability::TriggerRelay)
            .check();

        assert!(matches!(result, Err(AuthError::ServerRequired)));
    }
}
