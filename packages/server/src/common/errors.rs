use thiserror::Error;

use super::entity_ids::{ChannelId, ServerId};

/// Errors that end a relay pass and are reported back to the invoker.
///
/// Page and file fetch failures are not here: they are announced in the
/// bound channel and the pass handles them itself.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("no announcement channel bound for server {0}")]
    ChannelNotBound(ServerId),

    #[error("channel {0} could not be resolved")]
    ChannelUnavailable(ChannelId),

    #[error("a relay pass is already running on server {0}")]
    AlreadyRunning(ServerId),

    #[error("{0}")]
    Chat(#[source] anyhow::Error),
}
