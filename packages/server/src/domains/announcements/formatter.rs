//! Builds announcements for discovered files and for failures.
//!
//! Everything here is pure: inputs are already fetched and validated.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use super::models::{Announcement, AnnouncementStyle};

pub const DOWNLOAD_FIELD: &str = "Download";

const TITLE_PREFIX: &str = "Mod APK: ";

const FEATURES: &str = " ━━━━━━━━━━━━━━━━━ \n Features: \n・ Min-Engine: Android 5.0 \n  ・ Sudo: Non-Root \n  ・ Architecture: 32bit/64bit \n  ・ Minimum Ram: 2gb";

const THUMBNAIL_URL: &str = "https://cdn.discordapp.com/attachments/1153874384289812551/1190968857393901630/communityIcon_q69d9lxagoi31.png?ex=65a3bb2e&is=6591462e&hm=0aace23c5be3eec2ce5a6681230a61fcbc05c1676da15f1f84c1d683e5003dc1&";
const MAIN_IMAGE_URL: &str = "https://cdn.discordapp.com/attachments/1153874384289812551/1190970979032240148/20231231_162303.jpg?ex=65a3bd28&is=65914828&hm=13061a28841ab28b9edff2e5a8c6d0f26b05eb7a3f7c3947bf337d00b6597151&";
const FOOTER_ICON_URL: &str = "https://cdn.discordapp.com/attachments/1153874384289812551/1190971025773559868/3937bafd4789a107b6a245ab983ea297.png?ex=65a3bd33&is=65914833&hm=0deff3b35f562e6fae8bb710230cd867344ab8edf198cabf686ebd16d9902585&";

/// Announcement for a newly discovered file
///
/// `link_text` is whatever the shortener produced, including its
/// `"Error: ..."` text when the service rejected the link.
pub fn format_announcement(
    file_name: &str,
    byte_size: u64,
    link_text: &str,
    timestamp: &str,
) -> Announcement {
    let description = format!("Size: {}\n{}", format_size_mib(byte_size), FEATURES);

    Announcement::new(
        AnnouncementStyle::Success,
        format!("{}{}", TITLE_PREFIX, display_file_name(file_name)),
        description,
    )
    .field(DOWNLOAD_FIELD, link_text, false)
    .thumbnail(THUMBNAIL_URL)
    .image(MAIN_IMAGE_URL)
    .footer(
        format!("Date uploaded: {}", timestamp),
        Some(FOOTER_ICON_URL.to_string()),
    )
}

/// Error-styled announcement for page- and file-level failures
pub fn format_error(message: impl Display) -> Announcement {
    Announcement::new(
        AnnouncementStyle::Error,
        "Error",
        format!("An error occurred: {}", message),
    )
}

/// Size in MiB with two decimals, e.g. `"2.00 MB"`
pub fn format_size_mib(byte_size: u64) -> String {
    format!("{:.2} MB", byte_size as f64 / (1024.0 * 1024.0))
}

/// `YYYY.MM.DD・HH:MM:SS`
pub fn upload_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%Y.%m.%d・%H:%M:%S").to_string()
}

/// Percent-decode a link's file name for display (invalid UTF-8 is replaced)
pub fn display_file_name(file_name: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(file_name.as_bytes())).into_owned()
}
