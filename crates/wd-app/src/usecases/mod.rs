mod add_clothing_item;
mod delete_clothing_item;
mod handle_image_load_failure;
mod prune_dangling_outfits;
mod reconcile_orphans;
mod save_outfit;
mod start_closet_watcher;
mod verify_image_exists;

pub use add_clothing_item::AddClothingItem;
pub use delete_clothing_item::DeleteClothingItem;
pub use handle_image_load_failure::HandleImageLoadFailure;
pub use prune_dangling_outfits::{PruneDanglingOutfits, PruneSummary};
pub use reconcile_orphans::{ReconcileOrphans, SweepOutcome, SweepSummary};
pub use save_outfit::{SaveOutfit, SaveOutfitError};
pub use start_closet_watcher::StartClosetWatcher;
pub use verify_image_exists::VerifyImageExists;
