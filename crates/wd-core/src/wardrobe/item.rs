use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, UserId};
use crate::wardrobe::Category;

/// A single catalogued clothing item.
///
/// Immutable after creation: items are never edited, only created on upload
/// and destroyed by explicit deletion or by orphan cleanup once the backing
/// image is confirmed missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub owner_id: UserId,
    pub category: Category,
    /// Opaque download URL of the stored image.
    pub image_url: String,
    pub is_public: bool,
    pub created_at_ms: i64,
}
