//! Prefix commands: `!setup <channel_id>` and `!start`.
//!
//! Parsing and dispatch are platform-neutral; the Discord handler only
//! resolves the actor and posts the reply.

use tracing::{info, warn};

use crate::common::{Actor, AdminCapability, ChannelId, RelayError};
use crate::domains::channels::{setup_channel, BindOutcome};
use crate::domains::relay::run_relay_pass;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw argument as typed; validated on dispatch
    Setup { channel: Option<String> },
    Start,
}

impl Command {
    fn capability(&self) -> AdminCapability {
        match self {
            Command::Setup { .. } => AdminCapability::ManageChannels,
            Command::Start => AdminCapability::TriggerRelay,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandRouter {
    prefix: String,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Recognise a command in a message; anything else is `None`
    pub fn parse(&self, content: &str) -> Option<Command> {
        let rest = content.trim().strip_prefix(self.prefix.as_str())?;
        let mut words = rest.split_whitespace();

        match words.next()? {
            "setup" => Some(Command::Setup {
                channel: words.next().map(str::to_string),
            }),
            "start" => Some(Command::Start),
            _ => None,
        }
    }

    /// Run a command and return the reply for the invoker, if any.
    ///
    /// A successful `!start` has no reply: its output is the announcements.
    pub async fn dispatch(
        &self,
        command: Command,
        actor: Actor,
        deps: &ServerDeps,
    ) -> Option<String> {
        let server_id = match actor.can(command.capability()).check() {
            Ok(server_id) => server_id,
            Err(e) => return Some(e.to_string()),
        };

        match command {
            Command::Setup { channel } => {
                let channel_id = match channel.as_deref().map(ChannelId::parse) {
                    Some(Ok(channel_id)) => channel_id,
                    Some(Err(_)) => {
                        return Some(
                            "An error occurred: channel_id must be a numeric channel ID."
                                .to_string(),
                        )
                    }
                    None => {
                        return Some(
                            "An error occurred: channel_id is a required argument that is missing."
                                .to_string(),
                        )
                    }
                };

                match setup_channel(server_id, channel_id, deps).await {
                    BindOutcome::AlreadyBound => Some("Channel already set up.".to_string()),
                    BindOutcome::Bound { .. } => Some(format!(
                        "Channel set up successfully. Mod APK links will be sent to channel ID {} on this server.",
                        channel_id
                    )),
                }
            }
            Command::Start => {
                info!(
                    server_id = %server_id,
                    member_id = %actor.member_id(),
                    "Relay pass requested"
                );

                match run_relay_pass(server_id, deps).await {
                    Ok(_) => None,
                    Err(e) => {
                        warn!(server_id = %server_id, error = %e, "Relay pass not completed");
                        Some(self.error_reply(&e))
                    }
                }
            }
        }
    }

    fn error_reply(&self, error: &RelayError) -> String {
        match error {
            RelayError::ChannelNotBound(_) => format!(
                "Please run `{}setup {{channel_id}}` to set up the channel first.",
                self.prefix
            ),
            RelayError::ChannelUnavailable(channel_id) => format!(
                "Invalid channel. Please run `{}setup {}` again.",
                self.prefix, channel_id
            ),
            RelayError::AlreadyRunning(_) => {
                "A relay pass is already running on this server.".to_string()
            }
            RelayError::Chat(e) => format!("An error occurred: {}", e),
        }
    }
}
