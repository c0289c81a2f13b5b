use diesel::prelude::*;
use wd_core::ids::{ItemId, UserId};
use wd_core::{Category, ClothingItem};

use crate::db::schema::t_clothing_item;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_clothing_item)]
pub struct ClothingItemRow {
    pub id: String,
    pub owner_id: String,
    pub category: String,
    pub image_url: String,
    pub is_public: bool,
    pub created_at: i64,
}

impl From<&ClothingItem> for ClothingItemRow {
    fn from(item: &ClothingItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            owner_id: item.owner_id.as_str().to_string(),
            category: item.category.as_str().to_string(),
            image_url: item.image_url.clone(),
            is_public: item.is_public,
            created_at: item.created_at_ms,
        }
    }
}

impl ClothingItemRow {
    /// Rows with a category the domain no longer knows are dropped, not
    /// surfaced as errors; the caller decides whether to log them.
    pub fn into_domain(self) -> Option<ClothingItem> {
        let category = self.category.parse::<Category>().ok()?;
        Some(ClothingItem {
            id: ItemId::from(self.id),
            owner_id: UserId::from(self.owner_id),
            category,
            image_url: self.image_url,
            is_public: self.is_public,
            created_at_ms: self.created_at,
        })
    }
}
