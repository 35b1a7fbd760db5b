// Discord bot setup (serenity gateway + prefix commands)
pub mod app;
pub mod commands;
pub mod discord_chat;
pub mod handler;

pub use app::build_bot;
pub use commands::{Command, CommandRouter};
