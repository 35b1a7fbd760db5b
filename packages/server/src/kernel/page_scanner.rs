//! HTTP page scanner - local HTTP + HTML parsing for file links
//!
//! This implementation:
//! - Uses reqwest for HTTP requests
//! - Uses scraper crate for HTML parsing
//! - Keeps `<a href>` targets ending in the configured extension
//!
//! Limitations:
//! - No JavaScript rendering (links must be present in the served HTML)

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::{BaseFileFetcher, BasePageScanner, DiscoveredLink, FetchError};

const USER_AGENT: &str = concat!("apk-relay/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used for pages, files and the shortener
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .context("Failed to create HTTP client")
}

/// Page scanner and file fetcher over plain HTTP
pub struct HttpPageScanner {
    client: reqwest::Client,
    extension: String,
}

impl HttpPageScanner {
    pub fn new(extension: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(build_http_client(timeout)?, extension))
    }

    pub fn with_client(client: reqwest::Client, extension: impl Into<String>) -> Self {
        Self {
            client,
            extension: extension.into(),
        }
    }

    async fn get_checked(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// Extract links whose raw href ends with `extension`, in document order
    pub fn extract_file_links(
        document: &Html,
        base_url: &Url,
        extension: &str,
    ) -> Vec<DiscoveredLink> {
        let link_selector = match Selector::parse("a[href]") {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        document
            .select(&link_selector)
            .filter_map(|el| el.value().attr("href"))
            .filter(|href| href.ends_with(extension))
            .filter_map(|href| match base_url.join(href) {
                Ok(url) => Some(DiscoveredLink {
                    url: url.to_string(),
                    file_name: Self::file_name(href).to_string(),
                }),
                Err(e) => {
                    warn!(href = %href, error = %e, "Skipping unresolvable link");
                    None
                }
            })
            .collect()
    }

    /// Last `/`-delimited segment of the raw href
    fn file_name(href: &str) -> &str {
        href.rsplit('/').next().unwrap_or(href)
    }
}

#[async_trait]
impl BasePageScanner for HttpPageScanner {
    async fn scan(&self, page_url: &str) -> Result<Vec<DiscoveredLink>, FetchError> {
        let base_url = Url::parse(page_url).map_err(|source| FetchError::InvalidUrl {
            url: page_url.to_string(),
            source,
        })?;
        debug!(url = %base_url, "Scanning page");

        let html = self.get_checked(page_url).await?.text().await?;
        let document = Html::parse_document(&html);
        let links = Self::extract_file_links(&document, &base_url, &self.extension);

        info!(
            url = %base_url,
            extension = %self.extension,
            links_found = links.len(),
            "Page scanned"
        );

        Ok(links)
    }
}

#[async_trait]
impl BaseFileFetcher for HttpPageScanner {
    async fn fetch_size(&self, file_url: &str) -> Result<u64, FetchError> {
        let mut response = self.get_checked(file_url).await?;

        let mut total: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            total += chunk.len() as u64;
        }

        debug!(url = %file_url, bytes = total, "File fetched");
        Ok(total)
    }
}
