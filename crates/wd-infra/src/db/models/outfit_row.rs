use anyhow::{Context, Result};
use diesel::prelude::*;
use wd_core::ids::{ItemId, OutfitId, UserId};
use wd_core::Outfit;

use crate::db::schema::t_outfit;

/// `item_ids` is stored as a JSON array of id strings; SQLite has no
/// native list column and the list is only ever read back whole.
#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_outfit)]
pub struct OutfitRow {
    pub id: String,
    pub owner_id: String,
    pub item_ids: String,
    pub is_public: bool,
    pub created_at: i64,
}

impl OutfitRow {
    pub fn from_domain(outfit: &Outfit) -> Result<Self> {
        let ids: Vec<&str> = outfit.item_ids.iter().map(|id| id.as_str()).collect();
        Ok(Self {
            id: outfit.id.as_str().to_string(),
            owner_id: outfit.owner_id.as_str().to_string(),
            item_ids: serde_json::to_string(&ids).context("failed to encode outfit item ids")?,
            is_public: outfit.is_public,
            created_at: outfit.created_at_ms,
        })
    }

    pub fn into_domain(self) -> Result<Outfit> {
        let ids: Vec<String> =
            serde_json::from_str(&self.item_ids).context("failed to decode outfit item ids")?;
        Ok(Outfit {
            id: OutfitId::from(self.id),
            owner_id: UserId::from(self.owner_id),
            item_ids: ids.into_iter().map(ItemId::from).collect(),
            is_public: self.is_public,
            created_at_ms: self.created_at,
        })
    }
}
