//! Bid persistence contract.

use async_trait::async_trait;
use fairbid_types::{Bid, BidId, ProjectId, Result};

/// Persistent collection of bids. Pure data access, no business rules.
#[async_trait]
pub trait BidStore: Send + Sync {
    /// All bids targeting one project, in `BidId` order (deterministic).
    async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<Bid>>;

    /// Insert a new bid.
    ///
    /// # Errors
    /// Returns [`FairbidError::Store`] if the id already exists.
    ///
    /// [`FairbidError::Store`]: fairbid_types::FairbidError::Store
    async fn insert(&self, bid: Bid) -> Result<()>;

    /// Replace one existing bid.
    async fn save(&self, bid: Bid) -> Result<()>;

    /// Replace the whole set of bids touched by one award, **all-or-none**:
    /// if any bid is unknown, nothing is written.
    async fn save_all(&self, bids: Vec<Bid>) -> Result<()>;

    /// Fetch one bid. `Ok(None)` when the id is unknown.
    async fn get(&self, id: BidId) -> Result<Option<Bid>>;
}
