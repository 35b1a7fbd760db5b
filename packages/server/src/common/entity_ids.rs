//! Typed ID definitions for chat-platform entities.
//!
//! ```rust
//! use relay_core::common::{ChannelId, ServerId};
//!
//! let server: ServerId = ServerId::new(1);
//! let channel: ChannelId = ChannelId::new(2);
//!
//! // This would be a compile error:
//! // let wrong: ChannelId = server;
//! # let _ = (server, channel);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for servers (Discord guilds).
pub struct Server;

/// Marker type for text channels announcements are posted to.
pub struct Channel;

/// Marker type for server members issuing commands.
pub struct Member;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for servers.
pub type ServerId = Id<Server>;

/// Typed ID for channels.
pub type ChannelId = Id<Channel>;

/// Typed ID for members.
pub type MemberId = Id<Member>;
