//! Use case for explicit, user-requested item deletion.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};
use wd_core::ports::{ItemRepositoryPort, ObjectStorePort};
use wd_core::{ClothingItem, StorageReference};

/// Deletes the record first, then the backing file when the reference
/// parses. A record whose URL is not a recognized store reference keeps its
/// file untouched. User-facing: failures propagate instead of being
/// swallowed like in the maintenance sweep.
pub struct DeleteClothingItem {
    item_repo: Arc<dyn ItemRepositoryPort>,
    object_store: Arc<dyn ObjectStorePort>,
}

impl DeleteClothingItem {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>, object_store: Arc<dyn ObjectStorePort>) -> Self {
        Self {
            item_repo,
            object_store,
        }
    }

    pub async fn execute(&self, item: &ClothingItem) -> Result<()> {
        let span = info_span!("usecase.delete_clothing_item.execute", item_id = %item.id);

        async {
            self.item_repo
                .delete_item(&item.id)
                .await
                .context("failed to delete item record")?;

            if let Some(path) = StorageReference::from_download_url(&item.image_url) {
                match self.object_store.delete(&path).await {
                    Ok(()) => {}
                    // Already gone counts as done.
                    Err(err) if err.is_not_found() => {}
                    Err(err) => return Err(err).context("failed to delete item image"),
                }
            }

            info!(item_id = %item.id, "clothing item deleted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
