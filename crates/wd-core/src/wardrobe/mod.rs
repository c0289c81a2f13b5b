//! Closet domain model: items, categories, outfits and snapshots.

mod category;
mod item;
mod outfit;
mod snapshot;

pub use category::{Category, UnknownCategory};
pub use item::ClothingItem;
pub use outfit::Outfit;
pub use snapshot::ClosetSnapshot;
