//! # fairbid-engine
//!
//! **The auction lifecycle engine for fairbid.**
//!
//! Owns the project/bid state machines, the best-bid selection rule, and
//! the atomic close-and-award transition. It exposes exactly three
//! operations to the outside:
//!
//! - [`AuctionEngine::sweep_expired`] — close every `OPEN` project past
//!   its deadline (driven by the reconciliation scheduler)
//! - [`AuctionEngine::award_manually`] — employer hires a specific bidder
//! - read-only status/summary queries for observability
//!
//! Both award paths share one internal primitive that serializes per
//! project (see [`locks::ProjectLocks`]) and commits the project status,
//! `freelancer_id`, and every touched bid status together or not at all.

pub mod engine;
pub mod locks;
pub mod selection;

pub use engine::AuctionEngine;
pub use locks::ProjectLocks;
pub use selection::select_winner;
