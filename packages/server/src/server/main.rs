// Main entry point for the relay bot

use anyhow::{Context, Result};
use relay_core::{server::build_bot, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,relay_core=debug,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting APK relay bot");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        website_url = %config.website_url,
        extension = %config.file_extension,
        "Configuration loaded"
    );

    let mut client = build_bot(&config).await?;

    client.start().await.context("Discord client error")?;

    Ok(())
}
