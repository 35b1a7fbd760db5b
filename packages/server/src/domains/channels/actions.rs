//! Channel domain actions - business logic functions
//!
//! Admin auth is checked at the command layer.

use tracing::info;

use crate::common::{ChannelId, ServerId};
use crate::domains::channels::BindOutcome;
use crate::kernel::ServerDeps;

/// Bind the announcement channel for a server
pub async fn setup_channel(
    server_id: ServerId,
    channel_id: ChannelId,
    deps: &ServerDeps,
) -> BindOutcome {
    let outcome = deps.channels.bind(server_id, channel_id).await;

    match outcome {
        BindOutcome::AlreadyBound => {
            info!(server_id = %server_id, channel_id = %channel_id, "Channel already bound")
        }
        BindOutcome::Bound { previous } => info!(
            server_id = %server_id,
            channel_id = %channel_id,
            previous = ?previous.map(|c| c.get()),
            "Channel bound"
        ),
    }

    outcome
}
