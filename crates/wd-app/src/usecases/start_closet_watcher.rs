//! Use case wiring the live closet feed to the orphan reconciler.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, Instrument};
use wd_core::ids::UserId;
use wd_core::ports::ClosetFeedPort;

use crate::usecases::{ReconcileOrphans, SweepOutcome};

/// Subscribes to one owner's snapshot feed and runs the reconciler on every
/// delivery. The reconciler's own throttle decides whether a delivery turns
/// into an actual sweep, so a chatty feed costs nothing beyond the gate
/// check.
///
/// The spawned task ends when the feed closes; there is no explicit
/// cancellation, an in-flight sweep simply runs to completion.
pub struct StartClosetWatcher {
    feed: Arc<dyn ClosetFeedPort>,
    reconciler: Arc<ReconcileOrphans>,
}

impl StartClosetWatcher {
    pub fn new(feed: Arc<dyn ClosetFeedPort>, reconciler: Arc<ReconcileOrphans>) -> Self {
        Self { feed, reconciler }
    }

    pub async fn execute(&self, owner_id: &UserId) -> Result<JoinHandle<()>> {
        let span = info_span!("usecase.start_closet_watcher.execute", owner_id = %owner_id);

        async {
            let mut snapshots = self
                .feed
                .subscribe(owner_id)
                .await
                .context("failed to subscribe to closet feed")?;

            let reconciler = self.reconciler.clone();
            let owner = owner_id.clone();
            let handle = tokio::spawn(async move {
                while let Some(snapshot) = snapshots.recv().await {
                    match reconciler.execute(&snapshot).await {
                        SweepOutcome::Throttled => {
                            debug!(owner_id = %owner, "sweep throttled");
                        }
                        SweepOutcome::Completed(summary) => {
                            debug!(owner_id = %owner, ?summary, "sweep completed");
                        }
                    }
                }
                debug!(owner_id = %owner, "closet feed closed, watcher stopping");
            });

            info!("closet watcher started");
            Ok(handle)
        }
        .instrument(span)
        .await
    }
}
