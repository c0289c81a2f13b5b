//! Foreground handler for images that fail to render.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, info_span, warn, Instrument};
use wd_core::ports::{ClockPort, ClosetViewPort, ItemRepositoryPort, ObjectStorePort};
use wd_core::{ClothingItem, ExistenceVerdict, MaintenanceConfig, StorageReference};

use crate::usecases::VerifyImageExists;

/// Narrow, reactive twin of the background sweep.
///
/// A render failure hides the tile immediately, then the store is probed
/// before anything destructive happens:
/// - confirmed absent: record and file are deleted best-effort, the tile
///   stays hidden;
/// - exists: the failure was rendering noise, the tile is restored with a
///   fresh cache-bypassing token;
/// - unknown: exactly one delayed re-check restores the tile optimistically;
///   no further retries.
pub struct HandleImageLoadFailure {
    view: Arc<dyn ClosetViewPort>,
    prober: VerifyImageExists,
    item_repo: Arc<dyn ItemRepositoryPort>,
    object_store: Arc<dyn ObjectStorePort>,
    clock: Arc<dyn ClockPort>,
    retry_delay: Duration,
}

impl HandleImageLoadFailure {
    pub fn new(
        view: Arc<dyn ClosetViewPort>,
        item_repo: Arc<dyn ItemRepositoryPort>,
        object_store: Arc<dyn ObjectStorePort>,
        clock: Arc<dyn ClockPort>,
        config: &MaintenanceConfig,
    ) -> Self {
        Self {
            view,
            prober: VerifyImageExists::new(object_store.clone()),
            item_repo,
            object_store,
            clock,
            retry_delay: Duration::from_millis(config.image_retry_delay_ms),
        }
    }

    pub async fn execute(&self, item: &ClothingItem) {
        let span = info_span!("usecase.handle_image_load_failure.execute", item_id = %item.id);

        async {
            // Immediate feedback: stop rendering the broken tile.
            self.view.hide_item(&item.id);

            match self.prober.execute(&item.image_url).await {
                ExistenceVerdict::ConfirmedAbsent => {
                    info!(item_id = %item.id, "image confirmed missing after render failure, deleting");
                    if let Err(err) = self.item_repo.delete_item(&item.id).await {
                        warn!(item_id = %item.id, error = %err, "record delete failed");
                    }
                    if let Some(path) = StorageReference::from_download_url(&item.image_url) {
                        match self.object_store.delete(&path).await {
                            Ok(()) => {}
                            Err(err) if err.is_not_found() => {}
                            Err(err) => {
                                warn!(item_id = %item.id, error = %err, "file delete failed")
                            }
                        }
                    }
                    // Tile stays hidden; the next snapshot no longer carries
                    // the item.
                }
                ExistenceVerdict::Exists => {
                    // The object is real; treat the failure as transient
                    // rendering noise and force a cache-bypassing reload.
                    self.view.restore_item(&item.id, self.clock.now_ms());
                }
                ExistenceVerdict::Unknown => {
                    let view = self.view.clone();
                    let clock = self.clock.clone();
                    let item_id = item.id.clone();
                    let delay = self.retry_delay;
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        view.restore_item(&item_id, clock.now_ms());
                    });
                }
            }
        }
        .instrument(span)
        .await
    }
}
