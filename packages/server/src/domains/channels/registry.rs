use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::common::{ChannelId, ServerId};

/// Result of binding a channel to a server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// Binding recorded (replacing any previous channel for the server)
    Bound { previous: Option<ChannelId> },
    /// The channel is already this server's binding; nothing changed
    AlreadyBound,
}

/// In-memory server → announcement channel bindings.
///
/// Thread-safe, cloneable. Not persisted: bindings are lost on restart.
#[derive(Clone, Default)]
pub struct ChannelRegistry {
    bindings: Arc<RwLock<HashMap<ServerId, ChannelId>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn bind(&self, server_id: ServerId, channel_id: ChannelId) -> BindOutcome {
        let mut bindings = self.bindings.write().await;
        match bindings.insert(server_id, channel_id) {
            Some(previous) if previous == channel_id => BindOutcome::AlreadyBound,
            previous => BindOutcome::Bound { previous },
        }
    }

    pub async fn resolve(&self, server_id: ServerId) -> Option<ChannelId> {
        self.bindings.read().await.get(&server_id).copied()
    }
}
