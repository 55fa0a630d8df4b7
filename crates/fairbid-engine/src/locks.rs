//! Per-project mutual exclusion.
//!
//! Every award attempt — sweep or manual hire — takes the project's lock
//! before its read-modify-write and holds it through the commit. Attempts
//! on *different* projects interleave freely; attempts on the same project
//! serialize, so the loser of a race observes the terminal status and
//! fails the state guard instead of double-awarding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use fairbid_types::ProjectId;
use tokio::sync::Mutex;

/// Lock table keyed by project id.
///
/// Entries are created on first use and dropped once the project reaches a
/// terminal status (see [`ProjectLocks::release`]). A failed attempt keeps
/// its entry so a retry serializes against any in-flight work; the table is
/// therefore bounded by the open projects ever attempted, not by total
/// project count.
#[derive(Default)]
pub struct ProjectLocks {
    inner: StdMutex<HashMap<ProjectId, Arc<Mutex<()>>>>,
}

impl ProjectLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex guarding `project_id`, created if absent.
    pub fn for_project(&self, project_id: ProjectId) -> Arc<Mutex<()>> {
        let mut table = self.inner.lock().expect("lock table poisoned");
        Arc::clone(table.entry(project_id).or_default())
    }

    /// Drop the entry for a project that reached a terminal status.
    ///
    /// Waiters already holding the `Arc` keep their handle; any later
    /// caller gets a fresh mutex, which is harmless because the status
    /// guard rejects terminal projects regardless of lock identity.
    pub fn release(&self, project_id: ProjectId) {
        let mut table = self.inner.lock().expect("lock table poisoned");
        table.remove(&project_id);
    }

    /// Number of live entries (observability/testing).
    pub fn len(&self) -> usize {
        self.inner.lock().expect("lock table poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
