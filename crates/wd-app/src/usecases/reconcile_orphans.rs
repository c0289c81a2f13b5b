//! Background sweep that reconciles item records against the object store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, info_span, warn, Instrument};
use wd_core::ports::{ClockPort, ItemRepositoryPort, ObjectStorePort};
use wd_core::{ClosetSnapshot, ExistenceVerdict, MaintenanceConfig, StorageReference};

use crate::usecases::VerifyImageExists;

/// Counters aggregated over one completed sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub probed: usize,
    pub deleted_records: usize,
    pub deleted_files: usize,
    pub skipped_unknown: usize,
    pub record_delete_failures: usize,
    pub file_delete_failures: usize,
}

/// Result of asking the reconciler to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// The minimum interval since the previous sweep has not elapsed;
    /// nothing was probed.
    Throttled,
    Completed(SweepSummary),
}

/// Orphan-record reconciler.
///
/// Walks a closet snapshot strictly sequentially and removes records whose
/// backing image the store confirms missing. Inconclusive probes leave the
/// record untouched. The sweep is best-effort maintenance: it never returns
/// an error, and the failure of one deletion neither blocks the sibling
/// deletion nor aborts the rest of the pass.
///
/// The throttle timestamp is owned by this instance and stamped before the
/// pass starts, so a failing sweep still counts against the interval and
/// overlapping re-entry is kept out.
pub struct ReconcileOrphans {
    prober: VerifyImageExists,
    item_repo: Arc<dyn ItemRepositoryPort>,
    object_store: Arc<dyn ObjectStorePort>,
    clock: Arc<dyn ClockPort>,
    min_interval_ms: i64,
    last_run_ms: Mutex<Option<i64>>,
}

impl ReconcileOrphans {
    pub fn new(
        item_repo: Arc<dyn ItemRepositoryPort>,
        object_store: Arc<dyn ObjectStorePort>,
        clock: Arc<dyn ClockPort>,
        config: &MaintenanceConfig,
    ) -> Self {
        Self {
            prober: VerifyImageExists::new(object_store.clone()),
            item_repo,
            object_store,
            clock,
            min_interval_ms: config.min_sweep_interval_ms as i64,
            last_run_ms: Mutex::new(None),
        }
    }

    pub async fn execute(&self, snapshot: &ClosetSnapshot) -> SweepOutcome {
        let span = info_span!("usecase.reconcile_orphans.execute", items = snapshot.len());

        async {
            let now = self.clock.now_ms();
            {
                let mut last_run = self.last_run_ms.lock().await;
                if let Some(previous) = *last_run {
                    if now - previous < self.min_interval_ms {
                        return SweepOutcome::Throttled;
                    }
                }
                // Stamp before sweeping so a failing pass still counts.
                *last_run = Some(now);
            }

            let mut summary = SweepSummary::default();
            for item in snapshot.iter() {
                summary.probed += 1;
                match self.prober.execute(&item.image_url).await {
                    ExistenceVerdict::Exists => {}
                    ExistenceVerdict::Unknown => summary.skipped_unknown += 1,
                    ExistenceVerdict::ConfirmedAbsent => {
                        info!(item_id = %item.id, "backing image confirmed missing, removing orphaned record");
                        self.remove_orphan(item, &mut summary).await;
                    }
                }
            }

            info!(
                probed = summary.probed,
                deleted_records = summary.deleted_records,
                deleted_files = summary.deleted_files,
                skipped_unknown = summary.skipped_unknown,
                "orphan sweep finished"
            );
            SweepOutcome::Completed(summary)
        }
        .instrument(span)
        .await
    }

    /// Record and file deletions are independent best-effort steps.
    async fn remove_orphan(&self, item: &wd_core::ClothingItem, summary: &mut SweepSummary) {
        match self.item_repo.delete_item(&item.id).await {
            Ok(()) => summary.deleted_records += 1,
            Err(err) => {
                warn!(item_id = %item.id, error = %err, "record delete failed during sweep");
                summary.record_delete_failures += 1;
            }
        }

        if let Some(path) = StorageReference::from_download_url(&item.image_url) {
            match self.object_store.delete(&path).await {
                Ok(()) => summary.deleted_files += 1,
                Err(err) if err.is_not_found() => summary.deleted_files += 1,
                Err(err) => {
                    warn!(item_id = %item.id, path = %path, error = %err, "file delete failed during sweep");
                    summary.file_delete_failures += 1;
                }
            }
        }
    }
}
