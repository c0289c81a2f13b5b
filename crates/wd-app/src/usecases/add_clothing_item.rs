//! Use case for uploading a new clothing item.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};
use wd_core::ids::{ItemId, UserId};
use wd_core::ports::{ClockPort, ItemRepositoryPort, ObjectStorePort};
use wd_core::{Category, ClothingItem, StorageReference};

/// Root prefix for uploaded item images in the object store.
const ITEMS_PREFIX: &str = "clothing_items";

/// Stores the image bytes, then creates the owning record carrying the
/// returned download URL. Unlike the maintenance paths this is a
/// user-facing operation, so failures propagate to the caller.
pub struct AddClothingItem {
    object_store: Arc<dyn ObjectStorePort>,
    item_repo: Arc<dyn ItemRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl AddClothingItem {
    pub fn new(
        object_store: Arc<dyn ObjectStorePort>,
        item_repo: Arc<dyn ItemRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            object_store,
            item_repo,
            clock,
        }
    }

    pub async fn execute(
        &self,
        owner_id: &UserId,
        category: Category,
        file_name: &str,
        image_bytes: Vec<u8>,
        is_public: bool,
    ) -> Result<ItemId> {
        let span = info_span!(
            "usecase.add_clothing_item.execute",
            owner_id = %owner_id,
            category = %category,
        );

        async {
            let now = self.clock.now_ms();
            let path = StorageReference::new(format!(
                "{ITEMS_PREFIX}/{owner_id}/{category}/{now}_{file_name}"
            ));

            let image_url = self
                .object_store
                .put(&path, image_bytes)
                .await
                .context("failed to upload item image")?;

            let item = ClothingItem {
                id: ItemId::new(),
                owner_id: owner_id.clone(),
                category,
                image_url,
                is_public,
                created_at_ms: now,
            };
            self.item_repo
                .insert_item(&item)
                .await
                .context("failed to create item record")?;

            info!(item_id = %item.id, "clothing item added");
            Ok(item.id)
        }
        .instrument(span)
        .await
    }
}
