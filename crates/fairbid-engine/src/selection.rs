//! Pure best-bid selection.
//!
//! The cost-minimizing rule: among a project's `BID_SENT` bids, the lowest
//! parsed amount wins; equal amounts fall back to the lowest [`BidId`]
//! (`fairbid_types::BidId`), a total order, so repeated sweeps over the
//! same input always pick the same winner. No side effects here — the
//! engine owns all mutation.

use fairbid_types::{Bid, BidStatus};

/// Select the winning bid from a snapshot of a project's bids.
///
/// Returns `None` when no `BID_SENT` bid exists (the `CLOSED_NO_BIDS`
/// outcome). Bids whose amount has no digits parse to zero and therefore
/// win over any priced bid — submission-time validation is the collaborator
/// contract that keeps such bids out.
#[must_use]
pub fn select_winner(bids: &[Bid]) -> Option<&Bid> {
    bids.iter()
        .filter(|b| b.status == BidStatus::Sent)
        .min_by(|a, b| {
            a.parsed_amount()
                .cmp(&b.parsed_amount())
                .then_with(|| a.id.cmp(&b.id))
        })
}
