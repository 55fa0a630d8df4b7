//! # fairbid-types
//!
//! Shared types, errors, and configuration for the **fairbid** auction
//! lifecycle engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ProjectId`], [`BidId`], [`UserId`]
//! - **Project model**: [`Project`], [`ProjectStatus`]
//! - **Bid model**: [`Bid`], [`BidStatus`]
//! - **Award model**: [`AwardResult`], [`AwardOutcome`], [`BidSummary`]
//! - **Amount parsing**: [`amount::parse_amount`], [`amount::parse_period`]
//! - **Configuration**: [`SweepConfig`], [`SchedulerConfig`]
//! - **Errors**: [`FairbidError`] with `FB_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod amount;
pub mod award;
pub mod bid;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod project;

// Re-export all primary types at crate root for ergonomic imports:
//   use fairbid_types::{Project, ProjectStatus, Bid, BidStatus, ...};

pub use award::*;
pub use bid::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use project::*;

// Constants are accessed via `fairbid_types::constants::FOO`
// (not re-exported to avoid name collisions).
