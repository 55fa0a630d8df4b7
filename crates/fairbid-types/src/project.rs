//! Project types for the fairbid auction engine.
//!
//! ## State Machine
//!
//! ```text
//!   ┌──────┐  best bid / manual hire  ┌────────┐
//!   │ OPEN ├─────────────────────────▶│ CLOSED │
//!   └──┬───┘                          └────────┘
//!      │ deadline, no bids
//!      ▼
//!   ┌────────────────┐     ┌───────────┐
//!   │ CLOSED_NO_BIDS │     │ CANCELLED │ (out-of-scope trigger)
//!   └────────────────┘     └───────────┘
//! ```
//!
//! A project leaves `OPEN` exactly once, only through the engine's atomic
//! award primitive, and is never reopened. `freelancer_id` is non-null iff
//! the status is `CLOSED`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{FairbidError, ProjectId, Result, UserId};

/// Lifecycle status of a project.
///
/// Transitions are **monotonic**: `Open` is the only non-terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Accepting bids. The only status the award primitive operates on.
    Open,
    /// Awarded to a freelancer. **Irreversible.**
    Closed,
    /// Deadline passed with zero bids. **Irreversible.**
    ClosedNoBids,
    /// Withdrawn by the employer (trigger lives outside the engine).
    Cancelled,
}

impl ProjectStatus {
    /// Whether the project is still accepting award attempts.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether no further transition is permitted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_open()
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::ClosedNoBids => write!(f, "CLOSED_NO_BIDS"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A posted project and its auction state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Owning employer. Immutable after creation.
    pub employer_id: UserId,
    /// Winning freelancer. Set exactly once, at award time.
    pub freelancer_id: Option<UserId>,
    pub status: ProjectStatus,
    /// After this instant the project is eligible for automatic closing.
    /// Set at creation, never mutated.
    pub bid_deadline: Option<DateTime<Utc>>,
    pub title: String,
    pub description: String,
    pub skill: String,
    pub budget_range: String,
    pub budget_period: String,
    pub date_posted: DateTime<Utc>,
    /// Engagement end supplied by a manual hire. Free text from the caller.
    pub end_date: Option<String>,
    /// Optimistic-concurrency stamp. Bumped by the store on every update.
    pub version: u64,
}

impl Project {
    /// Whether the bidding window has elapsed at `now`.
    ///
    /// Projects without a deadline are never auto-closed.
    #[must_use]
    pub fn is_past_deadline(&self, now: DateTime<Utc>) -> bool {
        self.bid_deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Transition `OPEN → CLOSED`, assigning the winning freelancer.
    ///
    /// # Errors
    /// Returns [`FairbidError::InvalidState`] if the project already left `OPEN`.
    pub fn award_to(&mut self, freelancer_id: UserId) -> Result<()> {
        if !self.status.is_open() {
            return Err(FairbidError::InvalidState {
                project_id: self.id,
                status: self.status,
            });
        }
        self.status = ProjectStatus::Closed;
        self.freelancer_id = Some(freelancer_id);
        Ok(())
    }

    /// Transition `OPEN → CLOSED_NO_BIDS`. `freelancer_id` stays `None`.
    ///
    /// # Errors
    /// Returns [`FairbidError::InvalidState`] if the project already left `OPEN`.
    pub fn close_no_bids(&mut self) -> Result<()> {
        if !self.status.is_open() {
            return Err(FairbidError::InvalidState {
                project_id: self.id,
                status: self.status,
            });
        }
        self.status = ProjectStatus::ClosedNoBids;
        Ok(())
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Project {
    pub fn dummy_open(employer_id: UserId, bid_deadline: Option<DateTime<Utc>>) -> Self {
        Self {
            id: ProjectId::new(),
            employer_id,
            freelancer_id: None,
            status: ProjectStatus::Open,
            bid_deadline,
            title: "Test project".to_string(),
            description: "A project used in tests".to_string(),
            skill: "rust".to_string(),
            budget_range: "100-500".to_string(),
            budget_period: "30".to_string(),
            date_posted: Utc::now(),
            end_date: None,
            version: 0,
        }
    }
}
