//! The auction engine: atomic close-and-award over the project and bid
//! stores.
//!
//! Both entry points — the deadline-driven [`AuctionEngine::sweep_expired`]
//! and the employer-driven [`AuctionEngine::award_manually`] — funnel into
//! one internal primitive that, per project:
//!
//! 1. Takes the project's lock from the [`ProjectLocks`] table
//! 2. Re-reads the project and rejects anything not `OPEN`
//! 3. Snapshots the project's bids **under the same lock** as the award
//!    decision
//! 4. Picks the winner (best-bid mode or fixed-winner mode)
//! 5. Commits the terminal bid statuses (all-or-none batch), then the
//!    project through the store's conditional update; a failed project
//!    commit restores the bid snapshot
//!
//! The commit runs on its own task that owns the lock guard, so a caller
//! that stops waiting (the sweep's per-project timeout) can never drop it
//! between the two store writes; the project stays locked until the commit
//! resolves one way or the other.
//!
//! The lock plus the `OPEN` guard make the primitive re-entrant-safe: of
//! two racing award attempts exactly one commits, the other fails with
//! `FB_ERR_101` and mutates nothing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use fairbid_store::{BidStore, ProjectStore};
use fairbid_types::{
    AwardOutcome, AwardResult, Bid, BidStatus, BidSummary, FairbidError, Project, ProjectId,
    ProjectStatus, Result, SweepConfig, UserId,
};
use rust_decimal::Decimal;

use crate::locks::ProjectLocks;
use crate::selection::select_winner;

/// How the winning bid is determined.
enum WinnerMode {
    /// Lowest parsed amount wins; ties break on lowest bid id.
    BestBid,
    /// The employer already chose; the freelancer must hold a `BID_SENT`
    /// bid on the project.
    Fixed(UserId),
}

/// The auction lifecycle engine. Sole writer of terminal project and bid
/// state.
pub struct AuctionEngine<P, B> {
    projects: Arc<P>,
    bids: Arc<B>,
    locks: Arc<ProjectLocks>,
    config: SweepConfig,
}

impl<P: ProjectStore + 'static, B: BidStore + 'static> AuctionEngine<P, B> {
    #[must_use]
    pub fn new(projects: Arc<P>, bids: Arc<B>, config: SweepConfig) -> Self {
        Self {
            projects,
            bids,
            locks: Arc::new(ProjectLocks::new()),
            config,
        }
    }

    /// Close and award every `OPEN` project whose deadline has passed at
    /// `now`.
    ///
    /// Returns one [`AwardResult`] per project actually transitioned.
    /// Per-project failures are logged and skipped — one bad project never
    /// aborts the rest of the pass — and each close is bounded by
    /// [`SweepConfig::project_timeout`] so a hung store call cannot stall
    /// the sweep. A close that outlives the timeout still finishes its
    /// commit in the background, holding the project's lock meanwhile.
    /// "No bids" is a valid outcome, not an error.
    ///
    /// # Errors
    /// Only the initial scan can fail the whole pass; everything after is
    /// per-project isolated.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<Vec<AwardResult>> {
        let candidates = self.projects.list_open_with_deadline().await?;

        let mut results = Vec::new();
        for project in candidates {
            if !project.is_past_deadline(now) {
                continue;
            }
            let project_id = project.id;
            let close = self.award(project_id, WinnerMode::BestBid, None);
            match tokio::time::timeout(self.config.project_timeout, close).await {
                Ok(Ok((_, result))) => {
                    tracing::info!(%project_id, outcome = %result.outcome, "sweep: project closed");
                    results.push(result);
                }
                // Raced to terminal by a manual hire between the scan and
                // the lock: left unchanged, not an error.
                Ok(Err(FairbidError::InvalidState { status, .. })) => {
                    tracing::debug!(%project_id, %status, "sweep: project already terminal");
                }
                Ok(Err(err)) => {
                    tracing::error!(%project_id, error = %err, "sweep: closing project failed");
                }
                Err(_) => {
                    tracing::error!(
                        %project_id,
                        timeout_ms = self.config.project_timeout.as_millis() as u64,
                        "sweep: closing project timed out"
                    );
                }
            }
        }
        Ok(results)
    }

    /// Award a project to an employer-chosen freelancer, bypassing the
    /// deadline check.
    ///
    /// # Errors
    /// - [`FairbidError::ProjectNotFound`] — unknown project
    /// - [`FairbidError::InvalidState`] — project already terminal
    /// - [`FairbidError::BidderNotFound`] — no `BID_SENT` bid from the
    ///   freelancer on this project
    ///
    /// No partial mutation occurs on any of these.
    pub async fn award_manually(
        &self,
        project_id: ProjectId,
        freelancer_id: UserId,
        end_date: Option<String>,
    ) -> Result<Project> {
        let (project, result) = self
            .award(project_id, WinnerMode::Fixed(freelancer_id), end_date)
            .await?;
        tracing::info!(%project_id, %freelancer_id, outcome = %result.outcome, "manual hire committed");
        Ok(project)
    }

    /// Current status of a project (observability/testing).
    pub async fn project_status(&self, project_id: ProjectId) -> Result<ProjectStatus> {
        self.projects
            .get(project_id)
            .await?
            .map(|p| p.status)
            .ok_or(FairbidError::ProjectNotFound(project_id))
    }

    /// Bid count and average parsed amount for a project's listing row.
    /// Unparsable amounts count as zero; no bids averages to zero.
    pub async fn bid_summary(&self, project_id: ProjectId) -> Result<BidSummary> {
        let bids = self.bids.list_by_project(project_id).await?;
        let bid_count = bids.len();
        let average_amount = if bid_count == 0 {
            Decimal::ZERO
        } else {
            let total: Decimal = bids.iter().map(Bid::parsed_amount).sum();
            total / Decimal::from(bid_count as u64)
        };
        Ok(BidSummary {
            project_id,
            bid_count,
            average_amount,
        })
    }

    /// The atomic award primitive shared by both paths.
    async fn award(
        &self,
        project_id: ProjectId,
        mode: WinnerMode,
        end_date: Option<String>,
    ) -> Result<(Project, AwardResult)> {
        let guard = self.locks.for_project(project_id).lock_owned().await;

        let mut project = self
            .projects
            .get(project_id)
            .await?
            .ok_or(FairbidError::ProjectNotFound(project_id))?;
        if !project.status.is_open() {
            // Terminal already; no further attempt needs this entry.
            self.locks.release(project_id);
            return Err(FairbidError::InvalidState {
                project_id,
                status: project.status,
            });
        }
        let expected_version = project.version;

        // Snapshot under the lock: bids persisted after this point belong
        // to the next award attempt, which will find the project terminal.
        let snapshot = self.bids.list_by_project(project_id).await?;

        let winner = match mode {
            WinnerMode::BestBid => select_winner(&snapshot).cloned(),
            WinnerMode::Fixed(freelancer_id) => Some(
                snapshot
                    .iter()
                    .find(|b| b.status == BidStatus::Sent && b.user_id == freelancer_id)
                    .cloned()
                    .ok_or(FairbidError::BidderNotFound {
                        project_id,
                        freelancer_id,
                    })?,
            ),
        };

        if end_date.is_some() {
            project.end_date = end_date;
        }

        let (outcome, updated_bids) = match winner {
            None => {
                project.close_no_bids()?;
                (AwardOutcome::ClosedNoBids, Vec::new())
            }
            Some(winning) => {
                project.award_to(winning.user_id)?;
                let mut updated = Vec::with_capacity(snapshot.len());
                for mut bid in snapshot.iter().cloned() {
                    if bid.status != BidStatus::Sent {
                        continue;
                    }
                    if bid.id == winning.id {
                        bid.accept()?;
                    } else {
                        bid.reject()?;
                    }
                    updated.push(bid);
                }
                (
                    AwardOutcome::Awarded {
                        freelancer_id: winning.user_id,
                        bid_id: winning.id,
                        amount: winning.parsed_amount(),
                    },
                    updated,
                )
            }
        };

        // The commit runs on its own task holding the lock guard: if the
        // caller stops waiting (sweep timeout), the task still runs both
        // store writes (or the rollback) to completion, and the lock keeps
        // every other attempt out until it does.
        let projects = Arc::clone(&self.projects);
        let bids = Arc::clone(&self.bids);
        let locks = Arc::clone(&self.locks);
        let commit = tokio::spawn(async move {
            let _guard = guard;

            let wrote_bids = !updated_bids.is_empty();
            if wrote_bids {
                bids.save_all(updated_bids).await?;
            }

            let stored = match projects.update(project, expected_version).await {
                Ok(stored) => stored,
                Err(err) => {
                    if wrote_bids {
                        if let Err(rollback_err) = bids.save_all(snapshot).await {
                            tracing::error!(
                                %project_id,
                                error = %rollback_err,
                                "award: bid rollback failed after project commit error"
                            );
                        }
                    }
                    return Err(err);
                }
            };

            // Terminal now; the lock entry is no longer needed.
            locks.release(project_id);
            Ok(stored)
        });

        let stored = commit
            .await
            .map_err(|err| FairbidError::Internal(format!("award commit task failed: {err}")))??;

        Ok((
            stored,
            AwardResult {
                project_id,
                outcome,
            },
        ))
    }
}
