//! Relay workflow - scan the page, announce every unseen file.
//!
//! ```text
//! Idle → Scanning → for each link: Fetching → Shortening → Sending → Recording → Idle
//! ```
//!
//! Files are handled strictly one after another. A file is recorded as seen
//! only after its announcement was sent; fetch failures leave it unseen so
//! the next pass retries it. A shortener rejection is not a failure: its
//! error text is posted in place of the link and the file is recorded.

use chrono::Local;
use tracing::{debug, error, info, warn};

use crate::common::{ChannelId, RelayError, ServerId};
use crate::domains::announcements::{
    format_announcement, format_error, upload_timestamp, Announcement,
};
use crate::domains::relay::{FileOutcome, RelaySummary};
use crate::kernel::{DiscoveredLink, ServerDeps};

/// Run one relay pass for `server_id`.
///
/// Returns `Err` only for problems reported back to the invoker: missing or
/// dead channel binding, a pass already running, or the chat platform
/// refusing a message. Page and file failures are announced in the channel
/// and reflected in the summary.
pub async fn run_relay_pass(
    server_id: ServerId,
    deps: &ServerDeps,
) -> Result<RelaySummary, RelayError> {
    let channel_id = deps
        .channels
        .resolve(server_id)
        .await
        .ok_or(RelayError::ChannelNotBound(server_id))?;

    if !deps.chat.channel_exists(channel_id).await {
        return Err(RelayError::ChannelUnavailable(channel_id));
    }

    let _guard = deps.relay_locks.try_acquire(server_id)?;

    info!(
        server_id = %server_id,
        channel_id = %channel_id,
        url = %deps.settings.website_url,
        "Starting relay pass"
    );

    let mut summary = RelaySummary::default();

    let links = match deps.page_scanner.scan(&deps.settings.website_url).await {
        Ok(links) => links,
        Err(e) => {
            error!(url = %deps.settings.website_url, error = %e, "Error accessing the website");
            send(deps, channel_id, &format_error(&e)).await?;
            summary.page_error = Some(e.to_string());
            return Ok(summary);
        }
    };

    summary.discovered = links.len();

    for link in &links {
        if deps.seen.contains(&link.file_name).await {
            debug!(file_name = %link.file_name, "Skipping already processed file");
            summary.skipped += 1;
            continue;
        }

        match relay_file(link, channel_id, deps).await? {
            FileOutcome::Announced => summary.announced += 1,
            FileOutcome::Failed => summary.failed += 1,
        }
    }

    info!(
        server_id = %server_id,
        discovered = summary.discovered,
        skipped = summary.skipped,
        announced = summary.announced,
        failed = summary.failed,
        "Relay pass complete"
    );

    Ok(summary)
}

/// Fetch → shorten → send → pause → record, for one unseen file
async fn relay_file(
    link: &DiscoveredLink,
    channel_id: ChannelId,
    deps: &ServerDeps,
) -> Result<FileOutcome, RelayError> {
    let byte_size = match deps.file_fetcher.fetch_size(&link.url).await {
        Ok(size) => size,
        Err(e) => {
            warn!(url = %link.url, error = %e, "Error during file processing");
            send(deps, channel_id, &format_error(&e)).await?;
            return Ok(FileOutcome::Failed);
        }
    };

    let link_text = match deps.shortener.shorten(&link.url).await {
        Ok(outcome) => outcome.link_text(),
        Err(e) => {
            warn!(url = %link.url, error = %e, "Shortener request failed");
            send(deps, channel_id, &format_error(&e)).await?;
            return Ok(FileOutcome::Failed);
        }
    };

    let timestamp = upload_timestamp(&Local::now());
    let announcement = format_announcement(&link.file_name, byte_size, &link_text, &timestamp);
    send(deps, channel_id, &announcement).await?;

    if !deps.settings.post_delay.is_zero() {
        tokio::time::sleep(deps.settings.post_delay).await;
    }

    if let Err(e) = deps.seen.mark_seen(&link.file_name).await {
        error!(file_name = %link.file_name, error = %e, "Announced but could not record file");
        return Ok(FileOutcome::Failed);
    }

    info!(file_name = %link.file_name, bytes = byte_size, "File announced");
    Ok(FileOutcome::Announced)
}

async fn send(
    deps: &ServerDeps,
    channel_id: ChannelId,
    announcement: &Announcement,
) -> Result<(), RelayError> {
    deps.chat
        .send_announcement(channel_id, announcement)
        .await
        .map_err(RelayError::Chat)
}
