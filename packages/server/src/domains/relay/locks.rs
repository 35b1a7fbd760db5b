use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::common::{RelayError, ServerId};

/// Tracks which servers have a relay pass in flight.
///
/// Thread-safe, cloneable. At most one pass per server; passes on
/// different servers do not block each other.
#[derive(Clone, Default)]
pub struct RelayLocks {
    in_flight: Arc<Mutex<HashSet<ServerId>>>,
}

impl RelayLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the server for one pass; released when the guard drops
    pub fn try_acquire(&self, server_id: ServerId) -> Result<RelayGuard, RelayError> {
        if !self.lock().insert(server_id) {
            return Err(RelayError::AlreadyRunning(server_id));
        }

        Ok(RelayGuard {
            locks: self.clone(),
            server_id,
        })
    }

    pub fn is_running(&self, server_id: ServerId) -> bool {
        self.lock().contains(&server_id)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<ServerId>> {
        // The set stays consistent even if a holder panicked
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Held for the duration of a relay pass
pub struct RelayGuard {
    locks: RelayLocks,
    server_id: ServerId,
}

impl Drop for RelayGuard {
    fn drop(&mut self) {
        self.locks.lock().remove(&self.server_id);
    }
}
