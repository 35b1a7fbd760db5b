//! Seen-set store - identifiers of files already announced.
//!
//! The whole log is read into memory at startup; every successful
//! announcement appends one line. Lines are never rewritten or removed.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Append-only record of announced file identifiers.
///
/// Cloneable; clones share the same in-memory set and log file.
#[derive(Clone)]
pub struct SeenStore {
    path: PathBuf,
    seen: Arc<RwLock<SeenLog>>,
}

struct SeenLog {
    ids: HashSet<String>,
    /// The file's last line has no `\n` yet
    unterminated: bool,
}

impl SeenStore {
    /// Load the log at `path`. A missing log is an empty set.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let seen = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => SeenLog {
                ids: contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect(),
                unterminated: !contents.is_empty() && !contents.ends_with('\n'),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => SeenLog {
                ids: HashSet::new(),
                unterminated: false,
            },
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read seen log {}", path.display()))
            }
        };

        info!(path = %path.display(), entries = seen.ids.len(), "Seen log loaded");

        Ok(Self {
            path,
            seen: Arc::new(RwLock::new(seen)),
        })
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.seen.read().await.ids.contains(id)
    }

    /// Record `id` as announced: append to the log, then insert in memory.
    ///
    /// Already-seen identifiers are not appended again.
    pub async fn mark_seen(&self, id: &str) -> Result<()> {
        let mut seen = self.seen.write().await;
        if seen.ids.contains(id) {
            return Ok(());
        }

        let line = if seen.unterminated {
            format!("\n{}\n", id)
        } else {
            format!("{}\n", id)
        };

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open seen log {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .await
            .context("Failed to append to seen log")?;
        file.flush().await.context("Failed to flush seen log")?;

        seen.unterminated = false;
        seen.ids.insert(id.to_string());
        debug!(id = %id, "Marked seen");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.seen.read().await.ids.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.seen.read().await.ids.is_empty()
    }
}
