//! Award results produced by the auction engine.
//!
//! One [`AwardResult`] is emitted per project actually transitioned by a
//! sweep (or by a manual hire). Projects left untouched — wrong status,
//! deadline in the future — produce no result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BidId, ProjectId, UserId};

/// The terminal outcome of one award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AwardOutcome {
    /// A winning bid was selected; the project is `CLOSED`.
    Awarded {
        freelancer_id: UserId,
        bid_id: BidId,
        /// The winner's parsed amount.
        amount: Decimal,
    },
    /// No bids existed at closing time; the project is `CLOSED_NO_BIDS`.
    ClosedNoBids,
}

impl std::fmt::Display for AwardOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Awarded { freelancer_id, .. } => write!(f, "awarded:{freelancer_id}"),
            Self::ClosedNoBids => write!(f, "closed_no_bids"),
        }
    }
}

/// One project transitioned by an award pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardResult {
    pub project_id: ProjectId,
    pub outcome: AwardOutcome,
}

/// Aggregate view over a project's bids, for observability and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidSummary {
    pub project_id: ProjectId,
    pub bid_count: usize,
    /// Mean of the parsed amounts; zero when there are no bids.
    pub average_amount: Decimal,
}
