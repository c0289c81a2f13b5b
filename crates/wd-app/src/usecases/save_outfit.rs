//! Use case for saving a composed outfit.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use wd_core::ids::{ItemId, OutfitId, UserId};
use wd_core::ports::{ClockPort, OutfitRepositoryPort};
use wd_core::Outfit;

#[derive(Debug, thiserror::Error)]
pub enum SaveOutfitError {
    #[error("an outfit needs at least {min} items, got {got}", min = Outfit::MIN_ITEMS)]
    Incomplete { got: usize },

    #[error("failed to save outfit: {0}")]
    Storage(String),
}

pub struct SaveOutfit {
    outfit_repo: Arc<dyn OutfitRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl SaveOutfit {
    pub fn new(outfit_repo: Arc<dyn OutfitRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { outfit_repo, clock }
    }

    pub async fn execute(
        &self,
        owner_id: &UserId,
        item_ids: Vec<ItemId>,
        is_public: bool,
    ) -> Result<OutfitId, SaveOutfitError> {
        let span = info_span!("usecase.save_outfit.execute", owner_id = %owner_id);

        async {
            if item_ids.len() < Outfit::MIN_ITEMS {
                return Err(SaveOutfitError::Incomplete {
                    got: item_ids.len(),
                });
            }

            let outfit = Outfit {
                id: OutfitId::new(),
                owner_id: owner_id.clone(),
                item_ids,
                is_public,
                created_at_ms: self.clock.now_ms(),
            };
            self.outfit_repo
                .insert_outfit(&outfit)
                .await
                .map_err(|e| SaveOutfitError::Storage(e.to_string()))?;

            info!(outfit_id = %outfit.id, "outfit saved");
            Ok(outfit.id)
        }
        .instrument(span)
        .await
    }
}
