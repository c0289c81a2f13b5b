use anyhow::{Context, Result};
use async_trait::async_trait;
use diesel::prelude::*;
use tracing::warn;

use wd_core::ids::{ItemId, UserId};
use wd_core::wardrobe::ClothingItem;
use wd_core::ports::ItemRepositoryPort;

use crate::db::{models::ClothingItemRow, pool::DbPool, schema::t_clothing_item::dsl::*};

pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn rows_to_items(rows: Vec<ClothingItemRow>) -> Vec<ClothingItem> {
        rows.into_iter()
            .filter_map(|row| {
                let row_id = row.id.clone();
                let item = row.into_domain();
                if item.is_none() {
                    warn!(item_id = %row_id, "skipping item row with unknown category");
                }
                item
            })
            .collect()
    }
}

#[async_trait]
impl ItemRepositoryPort for DieselItemRepository {
    async fn insert_item(&self, item: &ClothingItem) -> Result<()> {
        let mut conn = self.pool.get().context("failed to get db connection")?;

        let row = ClothingItemRow::from(item);

        diesel::insert_into(t_clothing_item)
            .values(&row)
            .execute(&mut conn)
            .context("failed to insert clothing item")?;

        Ok(())
    }

    async fn get_item(&self, item_id: &ItemId) -> Result<Option<ClothingItem>> {
        let mut conn = self.pool.get().context("failed to get db connection")?;

        let row = t_clothing_item
            .filter(id.eq(item_id.as_str()))
            .first::<ClothingItemRow>(&mut conn)
            .optional()
            .context("failed to query clothing item")?;

        Ok(row.and_then(ClothingItemRow::into_domain))
    }

    async fn list_items_for_owner(&self, target_owner: &UserId) -> Result<Vec<ClothingItem>> {
        let mut conn = self.pool.get().context("failed to get db connection")?;

        let rows = t_clothing_item
            .filter(owner_id.eq(target_owner.as_str()))
            .order(created_at.desc())
            .load::<ClothingItemRow>(&mut conn)
            .context("failed to list clothing items")?;

        Ok(Self::rows_to_items(rows))
    }

    async fn list_items_by_ids(&self, item_ids: &[ItemId]) -> Result<Vec<ClothingItem>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().context("failed to get db connection")?;

        let wanted: Vec<&str> = item_ids.iter().map(|i| i.as_str()).collect();
        let rows = t_clothing_item
            .filter(id.eq_any(wanted))
            .load::<ClothingItemRow>(&mut conn)
            .context("failed to query clothing items by id")?;

        Ok(Self::rows_to_items(rows))
    }

    async fn delete_item(&self, item_id: &ItemId) -> Result<()> {
        let mut conn = self.pool.get().context("failed to get db connection")?;

        // Deleting a row that is already gone is success, not an error.
        diesel::delete(t_clothing_item.filter(id.eq(item_id.as_str())))
            .execute(&mut conn)
            .context("failed to delete clothing item")?;

        Ok(())
    }
}
