// APK Relay - Core
//
// Scans a download page for new files, shortens their links through Shareus
// and announces them in a Discord channel bound per server.
//
// Infrastructure lives in kernel/ behind Base* traits; business logic lives
// in domains/; the Discord boundary lives in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
