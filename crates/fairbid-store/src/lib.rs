//! # fairbid-store
//!
//! Store traits and in-memory adapters for the fairbid auction engine.
//!
//! The engine talks to persistence through two narrow traits:
//!
//! 1. [`ProjectStore`]: `get` / `list_open_with_deadline` / `insert` /
//!    conditional `update` (compare-and-swap on a version stamp)
//! 2. [`BidStore`]: `list_by_project` / `insert` / `save` / all-or-none
//!    `save_all`
//!
//! [`MemoryProjectStore`] and [`MemoryBidStore`] are the reference
//! adapters; any durable backend implements the same contracts.

pub mod bid_store;
pub mod memory;
pub mod project_store;

pub use bid_store::BidStore;
pub use memory::{MemoryBidStore, MemoryProjectStore};
pub use project_store::ProjectStore;
