//! Channels domain - where each server's announcements are delivered

pub mod actions;
pub mod registry;

pub use actions::setup_channel;
pub use registry::{BindOutcome, ChannelRegistry};
