//! Kernel module - infrastructure and dependencies.

pub mod deps;
pub mod page_scanner;
pub mod seen_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::{RelaySettings, ServerDeps, ShareusAdapter};
pub use page_scanner::{build_http_client, HttpPageScanner};
pub use seen_store::SeenStore;
pub use test_dependencies::TestDependencies;
pub use traits::*;
