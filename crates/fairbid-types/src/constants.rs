//! System-wide constants for the fairbid auction engine.

/// Default reconciliation tick interval in milliseconds.
///
/// A deployment-time constant, independent of individual project deadlines.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10_000;

/// Default per-project timeout inside one sweep, in milliseconds.
/// A hung store call for one project must not stall the remainder.
pub const DEFAULT_PROJECT_TIMEOUT_MS: u64 = 5_000;

/// Default bidding window applied at project creation, in days.
pub const DEFAULT_BID_WINDOW_DAYS: i64 = 7;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "fairbid";
