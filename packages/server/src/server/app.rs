//! Bot setup: wire dependencies and build the gateway client.

use anyhow::{Context, Result};
use serenity::all::{Client, GatewayIntents, Http};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::commands::CommandRouter;
use crate::server::discord_chat::SerenityChatService;
use crate::server::handler::Handler;

/// Build the Discord client with all relay dependencies attached
pub async fn build_bot(config: &Config) -> Result<Client> {
    let http = Arc::new(Http::new(&config.discord_token));
    let chat = Arc::new(SerenityChatService::new(http));

    let deps = ServerDeps::from_config(config, chat)
        .await
        .context("Failed to build server dependencies")?;

    let handler = Handler::new(
        deps,
        CommandRouter::new(config.command_prefix.clone()),
        config.presence.clone(),
    );

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .context("Failed to create Discord client")
}
