//! Relay domain - scan, deduplicate, shorten and announce

pub mod locks;
pub mod models;
pub mod workflow;

pub use locks::{RelayGuard, RelayLocks};
pub use models::{FileOutcome, RelaySummary};
pub use workflow::run_relay_pass;
