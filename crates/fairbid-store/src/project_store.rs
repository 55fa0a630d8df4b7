//! Project persistence contract.
//!
//! The engine is the sole writer of award-path fields; the store's job is
//! durable reads/writes plus one concurrency primitive: the **conditional
//! update**. `update` commits only when the caller's `expected_version`
//! still matches the stored stamp, so a racing writer loses with
//! [`FairbidError::VersionConflict`] instead of silently clobbering a
//! terminal status.

use async_trait::async_trait;
use fairbid_types::{Project, ProjectId, Result};

/// Persistent collection of projects. Pure data access, no business rules.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetch one project. `Ok(None)` when the id is unknown.
    async fn get(&self, id: ProjectId) -> Result<Option<Project>>;

    /// All `OPEN` projects carrying a bid deadline — the sweep's scan set.
    async fn list_open_with_deadline(&self) -> Result<Vec<Project>>;

    /// Insert a new project.
    ///
    /// # Errors
    /// Returns [`FairbidError::Store`] if the id already exists.
    ///
    /// [`FairbidError::Store`]: fairbid_types::FairbidError::Store
    async fn insert(&self, project: Project) -> Result<()>;

    /// Conditionally replace a project: commits iff the stored version
    /// equals `expected_version`, bumping the stamp. Returns the stored
    /// record.
    ///
    /// # Errors
    /// - [`FairbidError::ProjectNotFound`] if the id is unknown
    /// - [`FairbidError::VersionConflict`] if the stamp moved
    ///
    /// [`FairbidError::ProjectNotFound`]: fairbid_types::FairbidError::ProjectNotFound
    /// [`FairbidError::VersionConflict`]: fairbid_types::FairbidError::VersionConflict
    async fn update(&self, project: Project, expected_version: u64) -> Result<Project>;
}
