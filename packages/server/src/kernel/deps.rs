//! Server dependencies for the relay (using traits for testability)
//!
//! This module provides the central dependency container used by the command
//! handlers and the relay workflow. All external services use trait
//! abstractions to enable testing.

use anyhow::Result;
use async_trait::async_trait;
use shareus::{ShareusOptions, ShareusService};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domains::channels::ChannelRegistry;
use crate::domains::relay::RelayLocks;
use crate::kernel::{
    build_http_client, BaseChatService, BaseFileFetcher, BaseLinkShortener, BasePageScanner,
    HttpPageScanner, SeenStore, ShortenOutcome,
};

// =============================================================================
// ShareusService Adapter (implements BaseLinkShortener trait)
// =============================================================================

/// Wrapper around ShareusService that implements BaseLinkShortener trait
pub struct ShareusAdapter(pub Arc<ShareusService>);

impl ShareusAdapter {
    pub fn new(service: Arc<ShareusService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseLinkShortener for ShareusAdapter {
    async fn shorten(&self, original_url: &str) -> Result<ShortenOutcome> {
        self.0
            .shorten(original_url)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// RelaySettings
// =============================================================================

/// Per-process knobs the relay workflow reads
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub website_url: String,
    /// Pause after every posted announcement
    pub post_delay: Duration,
}

impl RelaySettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            website_url: config.website_url.clone(),
            post_delay: config.post_delay(),
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to commands and the relay workflow
#[derive(Clone)]
pub struct ServerDeps {
    pub page_scanner: Arc<dyn BasePageScanner>,
    pub file_fetcher: Arc<dyn BaseFileFetcher>,
    pub shortener: Arc<dyn BaseLinkShortener>,
    pub chat: Arc<dyn BaseChatService>,
    /// Files already announced (loaded once at startup)
    pub seen: SeenStore,
    /// Server → announcement channel bindings (in memory only)
    pub channels: ChannelRegistry,
    /// One in-flight relay pass per server
    pub relay_locks: RelayLocks,
    pub settings: RelaySettings,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        page_scanner: Arc<dyn BasePageScanner>,
        file_fetcher: Arc<dyn BaseFileFetcher>,
        shortener: Arc<dyn BaseLinkShortener>,
        chat: Arc<dyn BaseChatService>,
        seen: SeenStore,
        channels: ChannelRegistry,
        relay_locks: RelayLocks,
        settings: RelaySettings,
    ) -> Self {
        Self {
            page_scanner,
            file_fetcher,
            shortener,
            chat,
            seen,
            channels,
            relay_locks,
            settings,
        }
    }

    /// Wire the production HTTP services from config around a chat service
    pub async fn from_config(config: &Config, chat: Arc<dyn BaseChatService>) -> Result<Self> {
        let client = build_http_client(config.http_timeout())?;

        let scanner = Arc::new(HttpPageScanner::with_client(
            client.clone(),
            config.file_extension.clone(),
        ));
        let shareus = ShareusService::with_client(
            ShareusOptions::new(config.shareus_api_key.clone())
                .with_endpoint(config.shortener_endpoint.clone()),
            client,
        );
        let seen = SeenStore::load(config.seen_log_path.clone()).await?;

        Ok(Self::new(
            scanner.clone(),
            scanner,
            Arc::new(ShareusAdapter::new(Arc::new(shareus))),
            chat,
            seen,
            ChannelRegistry::new(),
            RelayLocks::new(),
            RelaySettings::from_config(config),
        ))
    }
}
