// Business domains
pub mod announcements;
pub mod channels;
pub mod relay;
