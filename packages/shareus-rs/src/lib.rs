//! Pure Shareus REST API client.
//!
//! A minimal client for the Shareus "easy" link shortener endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use shareus::{ShareusOptions, ShareusService};
//!
//! let shareus = ShareusService::new(ShareusOptions::new("your-api-key"));
//!
//! let outcome = shareus.shorten("https://example.com/apks/app.apk").await?;
//! println!("{}", outcome.link_text());
//! ```

pub mod error;

pub use error::{Result, ShareusError};

use reqwest::{Client, StatusCode};

pub const DEFAULT_ENDPOINT: &str = "https://api.shareus.io/easy_api";

#[derive(Debug, Clone)]
pub struct ShareusOptions {
    pub api_key: String,
    pub endpoint: String,
}

impl ShareusOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// What the shortener answered.
///
/// A rejection is a value, not an error: Shareus reports bad keys and bad
/// links with a non-200 status and a plain text body, and callers decide
/// what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Shortened(String),
    Rejected { status: u16, body: String },
}

impl ShortenOutcome {
    /// Text to show where the short link would go.
    pub fn link_text(&self) -> String {
        match self {
            ShortenOutcome::Shortened(link) => link.clone(),
            ShortenOutcome::Rejected { body, .. } => format!("Error: {}", body),
        }
    }

    pub fn is_shortened(&self) -> bool {
        matches!(self, ShortenOutcome::Shortened(_))
    }
}

#[derive(Debug, Clone)]
pub struct ShareusService {
    client: Client,
    options: ShareusOptions,
}

impl ShareusService {
    pub fn new(options: ShareusOptions) -> Self {
        Self::with_client(options, Client::new())
    }

    /// Reuse an already configured HTTP client (timeouts, user agent).
    pub fn with_client(options: ShareusOptions, client: Client) -> Self {
        Self { client, options }
    }

    /// Shorten `original_url`.
    ///
    /// Only transport failures are `Err`; any HTTP answer is an outcome.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortenOutcome> {
        let resp = self
            .client
            .get(&self.options.endpoint)
            .query(&[
                ("key", self.options.api_key.as_str()),
                ("link", original_url),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status == StatusCode::OK {
            tracing::debug!(original_url, "Link shortened");
            Ok(ShortenOutcome::Shortened(body.trim().to_string()))
        } else {
            tracing::warn!(original_url, status = %status, "Shareus rejected link");
            Ok(ShortenOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_text_for_shortened() {
        let outcome = ShortenOutcome::Shortened("https://shareus.io/abc".to_string());
        assert_eq!(outcome.link_text(), "https://shareus.io/abc");
        assert!(outcome.is_shortened());
    }

    #[test]
    fn test_link_text_for_rejection() {
        let outcome = ShortenOutcome::Rejected {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(outcome.link_text(), "Error: not found");
        assert!(!outcome.is_shortened());
    }

    #[test]
    fn test_options_default_endpoint() {
        let options = ShareusOptions::new("key");
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);

        let options = options.with_endpoint("http://127.0.0.1:9/easy_api");
        assert_eq!(options.endpoint, "http://127.0.0.1:9/easy_api");
    }
}
