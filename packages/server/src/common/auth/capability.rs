/// Capabilities gated behind server administrator permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCapability {
    /// Bind the announcement channel (`!setup`)
    ManageChannels,

    /// Trigger a relay pass (`!start`)
    TriggerRelay,
}

impl AdminCapability {
    /// Check if this capability requires admin access
    pub fn requires_admin(&self) -> bool {
        match self {
            AdminCapability::ManageChannels | AdminCapability::TriggerRelay => true,
        }
    }
}
