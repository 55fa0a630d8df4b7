//! # fairbid-scheduler
//!
//! **The reconciliation scheduler for fairbid.**
//!
//! Drives [`fairbid_engine::AuctionEngine::sweep_expired`] on a fixed
//! interval so that every `OPEN` project is closed within one tick of its
//! deadline passing. The loop is self-healing by construction: a tick that
//! fails changes nothing, and the next tick re-derives its work from store
//! state alone.
//!
//! Time enters through the [`Clock`] trait so tests can pin `now`.

pub mod clock;
pub mod scheduler;

pub use clock::{Clock, SystemClock};
pub use scheduler::{run, spawn};
