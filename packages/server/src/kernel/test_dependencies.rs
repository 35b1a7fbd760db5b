// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{
    BaseChatService, BaseFileFetcher, BaseLinkShortener, BasePageScanner, DiscoveredLink,
    FetchError, RelaySettings, SeenStore, ServerDeps, ShortenOutcome,
};
use crate::common::ChannelId;
use crate::domains::announcements::Announcement;
use crate::domains::channels::ChannelRegistry;
use crate::domains::relay::RelayLocks;

pub const TEST_WEBSITE_URL: &str = "https://example.com/apks";

// =============================================================================
// Mock Page Scanner
// =============================================================================

enum ScanResponse {
    Links(Vec<DiscoveredLink>),
    Status(StatusCode),
}

/// Returns the same configured page on every scan
pub struct MockPageScanner {
    response: Mutex<ScanResponse>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageScanner {
    pub fn new() -> Self {
        Self {
            response: Mutex::new(ScanResponse::Links(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve these `(absolute url, file name)` links
    pub fn with_links(self, links: &[(&str, &str)]) -> Self {
        let links = links
            .iter()
            .map(|(url, file_name)| DiscoveredLink {
                url: url.to_string(),
                file_name: file_name.to_string(),
            })
            .collect();
        *self.response.lock().unwrap() = ScanResponse::Links(links);
        self
    }

    /// Fail every scan with an HTTP status
    pub fn with_status(self, status: StatusCode) -> Self {
        *self.response.lock().unwrap() = ScanResponse::Status(status);
        self
    }

    /// Get all page URLs that were scanned
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockPageScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePageScanner for MockPageScanner {
    async fn scan(&self, page_url: &str) -> Result<Vec<DiscoveredLink>, FetchError> {
        self.calls.lock().unwrap().push(page_url.to_string());

        match &*self.response.lock().unwrap() {
            ScanResponse::Links(links) => Ok(links.clone()),
            ScanResponse::Status(status) => Err(FetchError::Status {
                status: *status,
                url: page_url.to_string(),
            }),
        }
    }
}

// =============================================================================
// Mock File Fetcher
// =============================================================================

pub struct MockFileFetcher {
    sizes: Mutex<HashMap<String, u64>>,
    failures: Mutex<HashSet<String>>,
    default_size: u64,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFileFetcher {
    pub fn new() -> Self {
        Self {
            sizes: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashSet::new()),
            default_size: 1024 * 1024,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_size(self, url: &str, bytes: u64) -> Self {
        self.sizes.lock().unwrap().insert(url.to_string(), bytes);
        self
    }

    /// Answer 404 for this URL
    pub fn failing(self, url: &str) -> Self {
        self.failures.lock().unwrap().insert(url.to_string());
        self
    }

    /// Let a previously failing URL succeed
    pub fn recover(&self, url: &str) {
        self.failures.lock().unwrap().remove(url);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockFileFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseFileFetcher for MockFileFetcher {
    async fn fetch_size(&self, file_url: &str) -> Result<u64, FetchError> {
        self.calls.lock().unwrap().push(file_url.to_string());

        if self.failures.lock().unwrap().contains(file_url) {
            return Err(FetchError::Status {
                status: StatusCode::NOT_FOUND,
                url: file_url.to_string(),
            });
        }

        Ok(self
            .sizes
            .lock()
            .unwrap()
            .get(file_url)
            .copied()
            .unwrap_or(self.default_size))
    }
}

// =============================================================================
// Mock Link Shortener
// =============================================================================

/// Shortens to `https://shrs.link/<last segment>` unless told otherwise
pub struct MockLinkShortener {
    outcomes: Mutex<HashMap<String, ShortenOutcome>>,
    transport_failures: Mutex<HashSet<String>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockLinkShortener {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(HashMap::new()),
            transport_failures: Mutex::new(HashSet::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Have the service reject this URL with a status and body
    pub fn rejecting(self, url: &str, status: u16, body: &str) -> Self {
        self.outcomes.lock().unwrap().insert(
            url.to_string(),
            ShortenOutcome::Rejected {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Make the request for this URL fail before any HTTP answer
    pub fn unreachable_for(self, url: &str) -> Self {
        self.transport_failures
            .lock()
            .unwrap()
            .insert(url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockLinkShortener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseLinkShortener for MockLinkShortener {
    async fn shorten(&self, original_url: &str) -> Result<ShortenOutcome> {
        self.calls.lock().unwrap().push(original_url.to_string());

        if self.transport_failures.lock().unwrap().contains(original_url) {
            anyhow::bail!("HTTP request failed: connection refused");
        }

        if let Some(outcome) = self.outcomes.lock().unwrap().get(original_url) {
            return Ok(outcome.clone());
        }

        let slug = original_url.rsplit('/').next().unwrap_or(original_url);
        Ok(ShortenOutcome::Shortened(format!("https://shrs.link/{}", slug)))
    }
}

// =============================================================================
// Mock Chat Service
// =============================================================================

pub struct MockChatService {
    sent: Arc<Mutex<Vec<(ChannelId, Announcement)>>>,
    missing_channels: Mutex<HashSet<ChannelId>>,
    fail_sends: Mutex<bool>,
}

impl MockChatService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            missing_channels: Mutex::new(HashSet::new()),
            fail_sends: Mutex::new(false),
        }
    }

    /// Pretend this channel was deleted or is invisible to the bot
    pub fn with_missing_channel(self, channel_id: ChannelId) -> Self {
        self.missing_channels.lock().unwrap().insert(channel_id);
        self
    }

    /// Reject every send
    pub fn failing_sends(self) -> Self {
        *self.fail_sends.lock().unwrap() = true;
        self
    }

    /// All announcements sent, in order
    pub fn sent(&self) -> Vec<(ChannelId, Announcement)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn announcements(&self) -> Vec<Announcement> {
        self.sent().into_iter().map(|(_, a)| a).collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl Default for MockChatService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseChatService for MockChatService {
    async fn channel_exists(&self, channel_id: ChannelId) -> bool {
        !self.missing_channels.lock().unwrap().contains(&channel_id)
    }

    async fn send_announcement(
        &self,
        channel_id: ChannelId,
        announcement: &Announcement,
    ) -> Result<()> {
        if *self.fail_sends.lock().unwrap() {
            anyhow::bail!("Missing Access");
        }

        self.sent
            .lock()
            .unwrap()
            .push((channel_id, announcement.clone()));
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub page_scanner: Arc<MockPageScanner>,
    pub file_fetcher: Arc<MockFileFetcher>,
    pub shortener: Arc<MockLinkShortener>,
    pub chat: Arc<MockChatService>,
    pub channels: ChannelRegistry,
    pub relay_locks: RelayLocks,
    pub post_delay: Duration,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            page_scanner: Arc::new(MockPageScanner::new()),
            file_fetcher: Arc::new(MockFileFetcher::new()),
            shortener: Arc::new(MockLinkShortener::new()),
            chat: Arc::new(MockChatService::new()),
            channels: ChannelRegistry::new(),
            relay_locks: RelayLocks::new(),
            post_delay: Duration::ZERO,
        }
    }

    /// Set a mock page scanner
    pub fn mock_scanner(mut self, scanner: MockPageScanner) -> Self {
        self.page_scanner = Arc::new(scanner);
        self
    }

    /// Set a mock file fetcher
    pub fn mock_fetcher(mut self, fetcher: MockFileFetcher) -> Self {
        self.file_fetcher = Arc::new(fetcher);
        self
    }

    /// Set a mock link shortener
    pub fn mock_shortener(mut self, shortener: MockLinkShortener) -> Self {
        self.shortener = Arc::new(shortener);
        self
    }

    /// Set a mock chat service
    pub fn mock_chat(mut self, chat: MockChatService) -> Self {
        self.chat = Arc::new(chat);
        self
    }

    pub fn post_delay(mut self, delay: Duration) -> Self {
        self.post_delay = delay;
        self
    }

    /// Build ServerDeps sharing these mocks (call again to get another handle)
    pub fn server_deps(&self, seen: SeenStore) -> ServerDeps {
        ServerDeps::new(
            self.page_scanner.clone(),
            self.file_fetcher.clone(),
            self.shortener.clone(),
            self.chat.clone(),
            seen,
            self.channels.clone(),
            self.relay_locks.clone(),
            RelaySettings {
                website_url: TEST_WEBSITE_URL.to_string(),
                post_delay: self.post_delay,
            },
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
