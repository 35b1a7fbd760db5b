//! Typed snowflake wrappers for compile-time type safety.
//!
//! This module provides `Id<T>`, a typed wrapper around a Discord snowflake
//! (`u64`) that prevents accidentally mixing up different ID types (e.g.,
//! passing a `ChannelId` where a `ServerId` was expected).
//!
//! # Example
//!
//! ```rust
//! use relay_core::common::Id;
//!
//! pub struct Server;
//! pub struct Channel;
//!
//! let server_id: Id<Server> = Id::new(42);
//! let channel_id: Id<Channel> = Id::new(42);
//!
//! // This would be a compile error:
//! // let wrong: Id<Channel> = server_id;
//! # let _ = (server_id, channel_id);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::ParseIntError;

/// A typed wrapper around a `u64` snowflake.
#[repr(transparent)]
pub struct Id<T>(u64, PhantomData<fn() -> T>);

impl<T> Id<T> {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value, PhantomData)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses an `Id` from a command argument or config string.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self::new(s.trim().parse()?))
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
