// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The relay workflow lives in domains/relay and talks to the outside world
// exclusively through these traits.
//
// Naming convention: Base* for trait names (e.g., BasePageScanner, BaseChatService)

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::common::ChannelId;
use crate::domains::announcements::Announcement;

pub use shareus::ShortenOutcome;

// =============================================================================
// Fetch errors (page and file downloads)
// =============================================================================

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for url: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

// =============================================================================
// Page Scanner Trait (Infrastructure)
// =============================================================================

/// A downloadable file link found on the scanned page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredLink {
    /// Absolute URL, resolved against the page URL
    pub url: String,
    /// Last `/` segment of the raw href; the seen-set identifier
    pub file_name: String,
}

#[async_trait]
pub trait BasePageScanner: Send + Sync {
    /// Fetch `page_url` and return matching file links in document order
    async fn scan(&self, page_url: &str) -> Result<Vec<DiscoveredLink>, FetchError>;
}

// =============================================================================
// File Fetcher Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseFileFetcher: Send + Sync {
    /// Download the whole file and return its size in bytes
    async fn fetch_size(&self, file_url: &str) -> Result<u64, FetchError>;
}

// =============================================================================
// Link Shortener Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseLinkShortener: Send + Sync {
    /// Shorten a URL. A rejection from the service is an `Ok` outcome;
    /// only transport failures are errors.
    async fn shorten(&self, original_url: &str) -> Result<ShortenOutcome>;
}

// =============================================================================
// Chat Service Trait (Infrastructure - Discord)
// =============================================================================

#[async_trait]
pub trait BaseChatService: Send + Sync {
    /// Whether the channel still exists and is visible to the bot
    async fn channel_exists(&self, channel_id: ChannelId) -> bool;

    /// Post an announcement embed to a channel
    async fn send_announcement(
        &self,
        channel_id: ChannelId,
        announcement: &Announcement,
    ) -> Result<()>;
}
