//! Discord implementation of the chat service (serenity HTTP API).

use anyhow::{Context, Result};
use async_trait::async_trait;
use serenity::all::{
    ChannelId as DiscordChannelId, Colour, CreateEmbed, CreateEmbedFooter, CreateMessage, Http,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::common::ChannelId;
use crate::domains::announcements::{Announcement, AnnouncementStyle};
use crate::kernel::BaseChatService;

const SUCCESS_COLOUR: Colour = Colour::new(0x2ECC71);
const ERROR_COLOUR: Colour = Colour::new(0xE74C3C);

/// Posts announcements as embeds through the Discord REST API
pub struct SerenityChatService {
    http: Arc<Http>,
}

impl SerenityChatService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    fn discord_channel(channel_id: ChannelId) -> DiscordChannelId {
        DiscordChannelId::new(channel_id.get())
    }
}

/// Render an announcement as a Discord embed
pub fn build_embed(announcement: &Announcement) -> CreateEmbed {
    let colour = match announcement.style {
        AnnouncementStyle::Success => SUCCESS_COLOUR,
        AnnouncementStyle::Error => ERROR_COLOUR,
    };

    let mut embed = CreateEmbed::new()
        .title(&announcement.title)
        .description(&announcement.description)
        .colour(colour);

    for field in &announcement.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(url) = &announcement.thumbnail_url {
        embed = embed.thumbnail(url);
    }
    if let Some(url) = &announcement.image_url {
        embed = embed.image(url);
    }
    if let Some(footer) = &announcement.footer {
        let mut create_footer = CreateEmbedFooter::new(&footer.text);
        if let Some(icon_url) = &footer.icon_url {
            create_footer = create_footer.icon_url(icon_url);
        }
        embed = embed.footer(create_footer);
    }

    embed
}

#[async_trait]
impl BaseChatService for SerenityChatService {
    async fn channel_exists(&self, channel_id: ChannelId) -> bool {
        match Self::discord_channel(channel_id).to_channel(&self.http).await {
            Ok(_) => true,
            Err(e) => {
                warn!(channel_id = %channel_id, error = %e, "Channel lookup failed");
                false
            }
        }
    }

    async fn send_announcement(
        &self,
        channel_id: ChannelId,
        announcement: &Announcement,
    ) -> Result<()> {
        let message = CreateMessage::new().embed(build_embed(announcement));

        Self::discord_channel(channel_id)
            .send_message(&self.http, message)
            .await
            .with_context(|| format!("Failed to send announcement to channel {}", channel_id))?;

        debug!(channel_id = %channel_id, title = %announcement.title, "Announcement sent");
        Ok(())
    }
}
