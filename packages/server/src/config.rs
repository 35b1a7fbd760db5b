use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_WEBSITE_URL: &str = "https://example.com/apks";

/// Application configuration loaded from `config.json`, with environment overrides
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discord_token: String,
    #[serde(default)]
    pub shareus_api_key: String,
    #[serde(default = "default_website_url")]
    pub website_url: String,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
    #[serde(default = "default_seen_log_path")]
    pub seen_log_path: PathBuf,
    #[serde(default = "default_post_delay_secs")]
    pub post_delay_secs: u64,
    #[serde(default = "default_shortener_endpoint")]
    pub shortener_endpoint: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_presence")]
    pub presence: String,
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

fn default_website_url() -> String {
    DEFAULT_WEBSITE_URL.to_string()
}

fn default_file_extension() -> String {
    ".apk".to_string()
}

fn default_seen_log_path() -> PathBuf {
    PathBuf::from("downloaded_apks.txt")
}

fn default_post_delay_secs() -> u64 {
    3
}

fn default_shortener_endpoint() -> String {
    shareus::DEFAULT_ENDPOINT.to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_presence() -> String {
    "VisualELF".to_string()
}

fn default_command_prefix() -> String {
    "!".to_string()
}

impl Config {
    /// Load configuration from the file named by `RELAY_CONFIG` (or `config.json`)
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let path = env::var("RELAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides(|key| env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parse a config file without environment overrides or validation
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Config must be a JSON object")
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            self.discord_token = token;
        }
        if let Some(key) = lookup("SHAREUS_API_KEY") {
            self.shareus_api_key = key;
        }
        if let Some(url) = lookup("WEBSITE_URL") {
            self.website_url = url;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.discord_token.trim().is_empty() {
            anyhow::bail!("discord_token must be set");
        }
        if self.shareus_api_key.trim().is_empty() {
            anyhow::bail!("shareus_api_key must be set");
        }
        url::Url::parse(&self.website_url).context("website_url must be an absolute URL")?;
        Ok(())
    }

    pub fn post_delay(&self) -> Duration {
        Duration::from_secs(self.post_delay_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
