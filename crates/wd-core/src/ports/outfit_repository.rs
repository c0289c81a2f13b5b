use anyhow::Result;
use async_trait::async_trait;

use crate::ids::{OutfitId, UserId};
use crate::wardrobe::Outfit;

#[async_trait]
pub trait OutfitRepositoryPort: Send + Sync {
    async fn insert_outfit(&self, outfit: &Outfit) -> Result<()>;

    async fn list_outfits_for_owner(&self, owner_id: &UserId) -> Result<Vec<Outfit>>;

    async fn delete_outfit(&self, outfit_id: &OutfitId) -> Result<()>;
}
