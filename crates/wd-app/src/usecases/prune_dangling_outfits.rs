//! Best-effort sweep removing outfits whose items no longer exist.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use wd_core::ids::UserId;
use wd_core::ports::{ItemRepositoryPort, OutfitRepositoryPort};

/// The backend caps membership queries, so only this many referenced ids
/// are checked per outfit.
const MEMBERSHIP_QUERY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub checked: usize,
    pub deleted: usize,
    pub failures: usize,
}

/// Walks an owner's outfits and deletes the ones that reference no items,
/// or only items that have since been removed. Same maintenance posture as
/// the orphan sweep: per-outfit failures are logged and counted, never
/// propagated, and never abort the pass.
pub struct PruneDanglingOutfits {
    outfit_repo: Arc<dyn OutfitRepositoryPort>,
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl PruneDanglingOutfits {
    pub fn new(
        outfit_repo: Arc<dyn OutfitRepositoryPort>,
        item_repo: Arc<dyn ItemRepositoryPort>,
    ) -> Self {
        Self {
            outfit_repo,
            item_repo,
        }
    }

    pub async fn execute(&self, owner_id: &UserId) -> PruneSummary {
        let span = info_span!("usecase.prune_dangling_outfits.execute", owner_id = %owner_id);

        async {
            let mut summary = PruneSummary::default();

            let outfits = match self.outfit_repo.list_outfits_for_owner(owner_id).await {
                Ok(outfits) => outfits,
                Err(err) => {
                    warn!(error = %err, "failed to list outfits, skipping prune");
                    summary.failures += 1;
                    return summary;
                }
            };

            for outfit in outfits {
                summary.checked += 1;

                let dangling = if outfit.item_ids.is_empty() {
                    true
                } else {
                    let probe_ids: Vec<_> = outfit
                        .item_ids
                        .iter()
                        .take(MEMBERSHIP_QUERY_LIMIT)
                        .cloned()
                        .collect();
                    match self.item_repo.list_items_by_ids(&probe_ids).await {
                        Ok(existing) => existing.is_empty(),
                        Err(err) => {
                            // Inconclusive lookup, keep the outfit.
                            warn!(outfit_id = %outfit.id, error = %err, "item lookup failed");
                            summary.failures += 1;
                            continue;
                        }
                    }
                };

                if !dangling {
                    continue;
                }

                match self.outfit_repo.delete_outfit(&outfit.id).await {
                    Ok(()) => {
                        info!(outfit_id = %outfit.id, "deleted dangling outfit");
                        summary.deleted += 1;
                    }
                    Err(err) => {
                        warn!(outfit_id = %outfit.id, error = %err, "outfit delete failed");
                        summary.failures += 1;
                    }
                }
            }

            summary
        }
        .instrument(span)
        .await
    }
}
