//! Configuration types for the fairbid engine and scheduler.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Timing configuration for one sweep pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Hard timeout applied to each project's close-and-award inside a
    /// sweep. On expiry the project is skipped and logged; the sweep
    /// continues with the remaining projects.
    pub project_timeout: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            project_timeout: Duration::from_millis(constants::DEFAULT_PROJECT_TIMEOUT_MS),
        }
    }
}

/// Configuration for the reconciliation scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Fixed cadence between sweep ticks. A tick waits for the previous
    /// sweep to finish before the next one is scheduled.
    pub tick_interval: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(constants::DEFAULT_TICK_INTERVAL_MS),
        }
    }
}
