//! Bid types for the fairbid auction engine.
//!
//! All bids on a project transition together, exactly once, at the moment
//! their project is awarded: the winner to `BID_ACCEPTED`, every other
//! `BID_SENT` bid to `BID_REJECTED`. Amounts arrive as loosely formatted
//! strings from the submission layer; see [`crate::amount`] for parsing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BidId, FairbidError, ProjectId, Result, UserId, amount};

/// Lifecycle status of a bid.
///
/// Transitions are **monotonic**: `Sent → Accepted` or `Sent → Rejected`,
/// never backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidStatus {
    /// Submitted and competing. The only status the award considers.
    Sent,
    /// This bid won the auction. **Irreversible.**
    Accepted,
    /// Another bid won, or the employer hired someone else. **Irreversible.**
    Rejected,
}

impl BidStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Sent)
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "BID_SENT"),
            Self::Accepted => write!(f, "BID_ACCEPTED"),
            Self::Rejected => write!(f, "BID_REJECTED"),
        }
    }
}

/// A freelancer's offer on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub project_id: ProjectId,
    /// The bidding freelancer.
    pub user_id: UserId,
    /// Offered price as submitted — may carry currency symbols and commas.
    pub amount: String,
    /// Offered duration. Numeric-only string, normalized at submission.
    pub period: String,
    pub status: BidStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Bid {
    /// The offered price as a comparable number. See [`amount::parse_amount`]
    /// for the normalization rules (no digits parses to zero).
    #[must_use]
    pub fn parsed_amount(&self) -> Decimal {
        amount::parse_amount(&self.amount)
    }

    /// Transition `BID_SENT → BID_ACCEPTED`.
    ///
    /// # Errors
    /// Returns [`FairbidError::Internal`] if the bid is already terminal;
    /// the engine never routes a terminal bid here.
    pub fn accept(&mut self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(FairbidError::Internal(format!(
                "cannot accept {} in status {}",
                self.id, self.status
            )));
        }
        self.status = BidStatus::Accepted;
        Ok(())
    }

    /// Transition `BID_SENT → BID_REJECTED`.
    ///
    /// # Errors
    /// Returns [`FairbidError::Internal`] if the bid is already terminal.
    pub fn reject(&mut self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(FairbidError::Internal(format!(
                "cannot reject {} in status {}",
                self.id, self.status
            )));
        }
        self.status = BidStatus::Rejected;
        Ok(())
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Bid {
    pub fn dummy_sent(project_id: ProjectId, user_id: UserId, amount: &str) -> Self {
        Self {
            id: BidId::new(),
            project_id,
            user_id,
            amount: amount.to_string(),
            period: "14".to_string(),
            status: BidStatus::Sent,
            submitted_at: Utc::now(),
        }
    }
}
