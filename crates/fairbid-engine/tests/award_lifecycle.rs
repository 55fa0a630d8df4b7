//! Integration tests for the full award lifecycle.
//!
//! These exercise the engine against the in-memory stores and against
//! misbehaving store wrappers: the end-to-end awarding scenario, isolation
//! between projects within one sweep, the per-project timeout, and the
//! no-partial-mutation guarantee when the project commit fails.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use fairbid_engine::AuctionEngine;
use fairbid_store::{BidStore, MemoryBidStore, MemoryProjectStore, ProjectStore};
use fairbid_types::{
    AwardOutcome, Bid, BidId, BidStatus, FairbidError, Project, ProjectId, ProjectStatus, Result,
    SweepConfig, UserId,
};

fn expired_project(employer: UserId) -> Project {
    Project::dummy_open(employer, Some(Utc::now() - chrono::Duration::seconds(1)))
}

// =============================================================================
// Test: the end-to-end awarding scenario
// =============================================================================
#[tokio::test]
async fn e2e_lowest_parsed_amount_wins() {
    let projects = Arc::new(MemoryProjectStore::new());
    let bids = Arc::new(MemoryBidStore::new());
    let engine = AuctionEngine::new(
        Arc::clone(&projects),
        Arc::clone(&bids),
        SweepConfig::default(),
    );

    let project = expired_project(UserId::new());
    projects.insert(project.clone()).await.unwrap();

    let (u10, u11, u12) = (UserId::new(), UserId::new(), UserId::new());
    let b1 = Bid::dummy_sent(project.id, u10, "$50.00");
    let b2 = Bid::dummy_sent(project.id, u11, "45");
    let b3 = Bid::dummy_sent(project.id, u12, "45.5");
    for bid in [&b1, &b2, &b3] {
        bids.insert(bid.clone()).await.unwrap();
    }

    let results = engine.sweep_expired(Utc::now()).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].project_id, project.id);
    assert!(matches!(
        results[0].outcome,
        AwardOutcome::Awarded { freelancer_id, bid_id, .. }
            if freelancer_id == u11 && bid_id == b2.id
    ));

    let stored = projects.get(project.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ProjectStatus::Closed);
    assert_eq!(stored.freelancer_id, Some(u11));

    let status_of = |id: BidId| {
        let bids = Arc::clone(&bids);
        async move { bids.get(id).await.unwrap().unwrap().status }
    };
    assert_eq!(status_of(b1.id).await, BidStatus::Rejected);
    assert_eq!(status_of(b2.id).await, BidStatus::Accepted);
    assert_eq!(status_of(b3.id).await, BidStatus::Rejected);
}

// =============================================================================
// Test: one failing project does not abort the sweep
// =============================================================================

/// Bid store that fails `list_by_project` for one poisoned project.
struct FlakyBidStore {
    inner: MemoryBidStore,
    poisoned: ProjectId,
}

#[async_trait]
impl BidStore for FlakyBidStore {
    async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<Bid>> {
        if project_id == self.poisoned {
            return Err(FairbidError::Store {
                reason: "simulated read failure".into(),
            });
        }
        self.inner.list_by_project(project_id).await
    }

    async fn insert(&self, bid: Bid) -> Result<()> {
        self.inner.insert(bid).await
    }

    async fn save(&self, bid: Bid) -> Result<()> {
        self.inner.save(bid).await
    }

    async fn save_all(&self, bids: Vec<Bid>) -> Result<()> {
        self.inner.save_all(bids).await
    }

    async fn get(&self, id: BidId) -> Result<Option<Bid>> {
        self.inner.get(id).await
    }
}

#[tokio::test]
async fn sweep_isolates_store_failures_per_project() {
    let projects = Arc::new(MemoryProjectStore::new());
    let poisoned = expired_project(UserId::new());
    let healthy = expired_project(UserId::new());
    projects.insert(poisoned.clone()).await.unwrap();
    projects.insert(healthy.clone()).await.unwrap();

    let bids = Arc::new(FlakyBidStore {
        inner: MemoryBidStore::new(),
        poisoned: poisoned.id,
    });
    let winner = UserId::new();
    bids.insert(Bid::dummy_sent(healthy.id, winner, "25"))
        .await
        .unwrap();

    let engine = AuctionEngine::new(
        Arc::clone(&projects),
        Arc::clone(&bids),
        SweepConfig::default(),
    );
    let results = engine.sweep_expired(Utc::now()).await.unwrap();

    // The healthy project closed; the poisoned one was skipped, not fatal.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].project_id, healthy.id);

    let skipped = projects.get(poisoned.id).await.unwrap().unwrap();
    assert_eq!(skipped.status, ProjectStatus::Open);

    // The next sweep picks the poisoned project up again once the store
    // recovers — nothing was consumed.
    let retried = engine.sweep_expired(Utc::now()).await.unwrap();
    assert!(retried.is_empty(), "still poisoned, still skipped");
}

// =============================================================================
// Test: a hung store call is bounded by the per-project timeout
// =============================================================================

/// Bid store that hangs on `list_by_project` for one project.
struct HangingBidStore {
    inner: MemoryBidStore,
    hanging: ProjectId,
}

#[async_trait]
impl BidStore for HangingBidStore {
    async fn list_by_project(&self, project_id: ProjectId) -> Result<Vec<Bid>> {
        if project_id == self.hanging {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.inner.list_by_project(project_id).await
    }

    async fn insert(&self, bid: Bid) -> Result<()> {
        self.inner.insert(bid).await
    }

    async fn save(&self, bid: Bid) -> Result<()> {
        self.inner.save(bid).await
    }

    async fn save_all(&self, bids: Vec<Bid>) -> Result<()> {
        self.inner.save_all(bids).await
    }

    async fn get(&self, id: BidId) -> Result<Option<Bid>> {
        self.inner.get(id).await
    }
}

#[tokio::test(start_paused = true)]
async fn sweep_times_out_hung_project_and_continues() {
    let projects = Arc::new(MemoryProjectStore::new());
    let hung = expired_project(UserId::new());
    let healthy = expired_project(UserId::new());
    projects.insert(hung.clone()).await.unwrap();
    projects.insert(healthy.clone()).await.unwrap();

    let bids = Arc::new(HangingBidStore {
        inner: MemoryBidStore::new(),
        hanging: hung.id,
    });
    bids.insert(Bid::dummy_sent(healthy.id, UserId::new(), "25"))
        .await
        .unwrap();

    let engine = AuctionEngine::new(
        Arc::clone(&projects),
        Arc::clone(&bids),
        SweepConfig {
            project_timeout: Duration::from_millis(100),
        },
    );
    let results = engine.sweep_expired(Utc::now()).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].project_id, healthy.id);
    let stalled = projects.get(hung.id).await.unwrap().unwrap();
    assert_eq!(stalled.status, ProjectStatus::Open, "hung project untouched");
}

// =============================================================================
// Test: a commit outliving the sweep timeout still lands atomically
// =============================================================================

/// Project store whose conditional update stalls before completing.
struct SlowCommitProjectStore {
    inner: MemoryProjectStore,
    stall: Duration,
}

#[async_trait]
impl ProjectStore for SlowCommitProjectStore {
    async fn get(&self, id: ProjectId) -> Result<Option<Project>> {
        self.inner.get(id).await
    }

    async fn list_open_with_deadline(&self) -> Result<Vec<Project>> {
        self.inner.list_open_with_deadline().await
    }

    async fn insert(&self, project: Project) -> Result<()> {
        self.inner.insert(project).await
    }

    async fn update(&self, project: Project, expected_version: u64) -> Result<Project> {
        tokio::time::sleep(self.stall).await;
        self.inner.update(project, expected_version).await
    }
}

#[tokio::test(start_paused = true)]
async fn timed_out_commit_still_lands_atomically() {
    let projects = Arc::new(SlowCommitProjectStore {
        inner: MemoryProjectStore::new(),
        stall: Duration::from_secs(60),
    });
    let bids = Arc::new(MemoryBidStore::new());

    let project = expired_project(UserId::new());
    projects.insert(project.clone()).await.unwrap();
    let winner = UserId::new();
    bids.insert(Bid::dummy_sent(project.id, winner, "30"))
        .await
        .unwrap();
    bids.insert(Bid::dummy_sent(project.id, UserId::new(), "40"))
        .await
        .unwrap();

    let engine = AuctionEngine::new(
        Arc::clone(&projects),
        Arc::clone(&bids),
        SweepConfig {
            project_timeout: Duration::from_millis(100),
        },
    );

    // The sweep gives up on the stalled project write and moves on.
    let results = engine.sweep_expired(Utc::now()).await.unwrap();
    assert!(results.is_empty());

    // The in-flight commit still holds the project's lock: a second sweep
    // cannot sneak in and close the project CLOSED_NO_BIDS under it.
    let results = engine.sweep_expired(Utc::now()).await.unwrap();
    assert!(results.is_empty());
    let stored = projects.get(project.id).await.unwrap().unwrap();
    assert_ne!(stored.status, ProjectStatus::ClosedNoBids);
    assert_eq!(stored.freelancer_id, None);

    // Once the stalled write resolves, the original award lands intact.
    tokio::time::sleep(Duration::from_secs(120)).await;
    let stored = projects.get(project.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ProjectStatus::Closed);
    assert_eq!(stored.freelancer_id, Some(winner));
    let all = bids.list_by_project(project.id).await.unwrap();
    let accepted = all.iter().filter(|b| b.status == BidStatus::Accepted).count();
    assert_eq!(accepted, 1, "exactly the lowest bid stays accepted");
}

// =============================================================================
// Test: failed project commit leaves no partially-awarded state
// =============================================================================

/// Project store whose conditional update can be switched to fail.
struct FailingProjectStore {
    inner: MemoryProjectStore,
    fail_update: AtomicBool,
}

#[async_trait]
impl ProjectStore for FailingProjectStore {
    async fn get(&self, id: ProjectId) -> Result<Option<Project>> {
        self.inner.get(id).await
    }

    async fn list_open_with_deadline(&self) -> Result<Vec<Project>> {
        self.inner.list_open_with_deadline().await
    }

    async fn insert(&self, project: Project) -> Result<()> {
        self.inner.insert(project).await
    }

    async fn update(&self, project: Project, expected_version: u64) -> Result<Project> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(FairbidError::Store {
                reason: "simulated write failure".into(),
            });
        }
        self.inner.update(project, expected_version).await
    }
}

#[tokio::test]
async fn failed_project_commit_rolls_back_bids() {
    let projects = Arc::new(FailingProjectStore {
        inner: MemoryProjectStore::new(),
        fail_update: AtomicBool::new(true),
    });
    let bids = Arc::new(MemoryBidStore::new());

    let project = expired_project(UserId::new());
    projects.insert(project.clone()).await.unwrap();
    let freelancer = UserId::new();
    bids.insert(Bid::dummy_sent(project.id, freelancer, "80"))
        .await
        .unwrap();
    bids.insert(Bid::dummy_sent(project.id, UserId::new(), "90"))
        .await
        .unwrap();

    let engine = AuctionEngine::new(
        Arc::clone(&projects),
        Arc::clone(&bids),
        SweepConfig::default(),
    );

    let err = engine
        .award_manually(project.id, freelancer, None)
        .await
        .unwrap_err();
    assert!(matches!(err, FairbidError::Store { .. }));

    // No partially-awarded state: project still OPEN, all bids BID_SENT.
    let stored = projects.get(project.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ProjectStatus::Open);
    assert_eq!(stored.freelancer_id, None);
    let all = bids.list_by_project(project.id).await.unwrap();
    assert!(all.iter().all(|b| b.status == BidStatus::Sent));

    // Once the store recovers, the same award goes through cleanly.
    projects.fail_update.store(false, Ordering::SeqCst);
    let awarded = engine
        .award_manually(project.id, freelancer, None)
        .await
        .unwrap();
    assert_eq!(awarded.status, ProjectStatus::Closed);
    assert_eq!(awarded.freelancer_id, Some(freelancer));
}
