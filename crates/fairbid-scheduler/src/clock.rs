//! Time source abstraction for the scheduler.
//!
//! The engine takes `now` as an argument on every sweep, so deadline
//! comparisons are driven entirely by the clock injected here. Production
//! uses [`SystemClock`]; tests substitute a fixed or stepped clock to make
//! expiry deterministic.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
