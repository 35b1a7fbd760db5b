//! Announcements domain - the messages posted for discovered files

pub mod formatter;
pub mod models;

pub use formatter::{
    format_announcement, format_error, format_size_mib, upload_timestamp, DOWNLOAD_FIELD,
};
pub use models::{Announcement, AnnouncementField, AnnouncementFooter, AnnouncementStyle};
