//! The reconciliation loop.
//!
//! A fixed-interval tick that hands the current time to
//! [`AuctionEngine::sweep_expired`] and logs the outcome. The loop never
//! dies on a failed tick: a store outage at tick N is retried from scratch
//! at tick N+1, because the sweep only acts on what is still `OPEN` and
//! past deadline at the time it runs.

use std::sync::Arc;

use fairbid_engine::AuctionEngine;
use fairbid_store::{BidStore, ProjectStore};
use fairbid_types::SchedulerConfig;
use tokio_util::sync::CancellationToken;

use crate::clock::Clock;

/// Run the reconciliation loop until `cancel` is triggered.
pub async fn run<P, B, C>(
    engine: Arc<AuctionEngine<P, B>>,
    clock: C,
    config: SchedulerConfig,
    cancel: CancellationToken,
) where
    P: ProjectStore + 'static,
    B: BidStore + 'static,
    C: Clock,
{
    tracing::info!(
        tick_interval_ms = config.tick_interval.as_millis() as u64,
        "reconciliation scheduler started"
    );

    let mut interval = tokio::time::interval(config.tick_interval);
    // A slow sweep should not be followed by a burst of catch-up ticks.
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::info!("reconciliation scheduler stopping");
                break;
            }
            _ = interval.tick() => {
                match engine.sweep_expired(clock.now()).await {
                    Ok(results) => {
                        if results.is_empty() {
                            tracing::debug!("sweep tick: nothing expired");
                        } else {
                            tracing::info!(closed = results.len(), "sweep tick: projects closed");
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "sweep tick failed; retrying next tick");
                    }
                }
            }
        }
    }
}

/// Spawn the reconciliation loop as a background task.
pub fn spawn<P, B, C>(
    engine: Arc<AuctionEngine<P, B>>,
    clock: C,
    config: SchedulerConfig,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()>
where
    P: ProjectStore + 'static,
    B: BidStore + 'static,
    C: Clock + 'static,
{
    tokio::spawn(run(engine, clock, config, cancel))
}
