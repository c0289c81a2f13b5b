use anyhow::Result;
use async_trait::async_trait;

use crate::ids::{ItemId, UserId};
use crate::wardrobe::ClothingItem;

/// Document-store side of the backend contract for clothing items.
///
/// `delete_item` is idempotent: removing an already-gone record is success,
/// which keeps best-effort cleanup passes from failing on repetition.
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    async fn insert_item(&self, item: &ClothingItem) -> Result<()>;

    async fn get_item(&self, item_id: &ItemId) -> Result<Option<ClothingItem>>;

    async fn list_items_for_owner(&self, owner_id: &UserId) -> Result<Vec<ClothingItem>>;

    /// Fetch the subset of `item_ids` that still exist. Callers bound the
    /// slice length themselves (the backend caps membership queries).
    async fn list_items_by_ids(&self, item_ids: &[ItemId]) -> Result<Vec<ClothingItem>>;

    async fn delete_item(&self, item_id: &ItemId) -> Result<()>;
}
