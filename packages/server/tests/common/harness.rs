//! Test harness for relay integration tests.
//!
//! Each harness owns a temporary directory holding the seen log, plus the
//! mock services wired into a fresh ServerDeps.

use anyhow::{Context, Result};
use relay_core::common::{ChannelId, ServerId};
use relay_core::kernel::test_dependencies::MockChatService;
use relay_core::kernel::{SeenStore, ServerDeps, TestDependencies};
use std::path::PathBuf;
use tempfile::TempDir;
use test_context::AsyncTestContext;

pub const SERVER: ServerId = ServerId::new(1_000);
pub const CHANNEL: ChannelId = ChannelId::new(123);

pub struct TestHarness {
    pub deps: TestDependencies,
    pub server_deps: ServerDeps,
    pub seen_log: PathBuf,
    _dir: TempDir,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::with_deps(TestDependencies::new())
            .await
            .expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Temp dir is removed on drop
    }
}

impl TestHarness {
    pub async fn with_deps(deps: TestDependencies) -> Result<Self> {
        Self::with_seen(deps, &[]).await
    }

    /// Start with a seen log that already holds `lines`
    pub async fn with_seen(deps: TestDependencies, lines: &[&str]) -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let seen_log = dir.path().join("downloaded_apks.txt");
        if !lines.is_empty() {
            let contents: String = lines.iter().map(|l| format!("{}\n", l)).collect();
            std::fs::write(&seen_log, contents).context("Failed to seed seen log")?;
        }

        let seen = SeenStore::load(&seen_log).await?;
        let server_deps = deps.server_deps(seen);

        Ok(Self {
            deps,
            server_deps,
            seen_log,
            _dir: dir,
        })
    }

    /// Bind the default test channel for the default test server
    pub async fn bind_default_channel(&self) {
        self.server_deps.channels.bind(SERVER, CHANNEL).await;
    }

    pub fn chat(&self) -> &MockChatService {
        &self.deps.chat
    }

    /// Lines of the seen log as persisted on disk
    pub fn seen_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.seen_log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// A fresh store loaded from the same log, as after a restart
    pub async fn reload_seen(&self) -> SeenStore {
        SeenStore::load(&self.seen_log)
            .await
            .expect("Failed to reload seen log")
    }
}
