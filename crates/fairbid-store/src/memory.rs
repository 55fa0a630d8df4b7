//! In-memory store adapters.
//!
//! `HashMap` state behind a `tokio::sync::RwLock`. These back the test
//! suites; a SQL-backed adapter would implement the same traits. The
//! conditional-update semantics here are the reference behavior for any
//! other adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use fairbid_types::{Bid, BidId, FairbidError, Project, ProjectId, Result};
use tokio::sync::RwLock;

use crate::{BidStore, ProjectStore};

/// In-memory [`ProjectStore`] with versioned conditional updates.
#[derive(Default)]
pub struct MemoryProjectStore {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl MemoryProjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects.
    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn get(&self, id: ProjectId) -> Result<Option<Project>> {
        Ok(self.projects.read().await.get(&id).cloned())
    }

    async fn list_open_with_deadline(&self) -> Result<Vec<Project>> {
        let mut open: Vec<Project> = self
            .projects
            .read()
            .await
            .values()
            .filter(|p| p.status.is_open() && p.bid_deadline.is_some())
            .cloned()
            .collect();
        // Deterministic scan order for reproducible sweeps.
        open.sort_by_key(|p| p.id);
        Ok(open)
    }

    async fn insert(&self, project: Project) -> Result<()> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(&project.id) {
            return Err(FairbidError::Store {
                reason: format!("project {} already exists", project.id),
            });
        }
        projects.insert(project.id, project);
        Ok(())
    }

    async fn update(&self, mut project: Project, expected_version: u64) -> Result<Project> {
        let mut projects = self.projects.write().await;
        let current = projects
            .get(&project.id)
            .ok_or(FairbidError::ProjectNotFound(project.id))?;
        if current.version != expected_version {
            return Err(FairbidError::VersionConflict {
                project_id: project.id,
            });
        }
        project.version = expected_version + 1;
        projects.insert(project.id, project.clone());
        Ok(project)
    }
}

/// In-memory [`BidStore`].
#[derive(Default)]
pub struct MemoryBidStore {
    bids: RwLock<HashMap<BidId, Bid>>,
}

impl MemoryBidStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.bids.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bids.read().await.is_empty()
    }
}

#[async_trait]
impl BidStore for MemoryBidStore {
    async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<Bid>> {
        let mut bids: Vec<Bid> = self
            .bids
            .read()
            .await
            .values()
            .filter(|b| b.project_id == project_id)
            .cloned()
            .collect();
        bids.sort_by_key(|b| b.id);
        Ok(bids)
    }

    async fn insert(&self, bid: Bid) -> Result<()> {
        let mut bids = self.bids.write().await;
        if bids.contains_key(&bid.id) {
            return Err(FairbidError::Store {
                reason: format!("{} already exists", bid.id),
            });
        }
        bids.insert(bid.id, bid);
        Ok(())
    }

    async fn save(&self, bid: Bid) -> Result<()> {
        let mut bids = self.bids.write().await;
        if !bids.contains_key(&bid.id) {
            return Err(FairbidError::Store {
                reason: format!("{} not found", bid.id),
            });
        }
        bids.insert(bid.id, bid);
        Ok(())
    }

    async fn save_all(&self, updated: Vec<Bid>) -> Result<()> {
        let mut bids = self.bids.write().await;
        // Validate the full batch before writing anything.
        for bid in &updated {
            if !bids.contains_key(&bid.id) {
                return Err(FairbidError::Store {
                    reason: format!("{} not found in batch save", bid.id),
                });
            }
        }
        for bid in updated {
            bids.insert(bid.id, bid);
        }
        Ok(())
    }

    async fn get(&self, id: BidId) -> Result<Option<Bid>> {
        Ok(self.bids.read().await.get(&id).cloned())
    }
}
