use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, OutfitId, UserId};

/// A composition of clothing items saved by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: OutfitId,
    pub owner_id: UserId,
    /// Items the outfit is composed of. At least two at creation time.
    pub item_ids: Vec<ItemId>,
    pub is_public: bool,
    pub created_at_ms: i64,
}

impl Outfit {
    /// Minimum number of items an outfit must reference when saved.
    pub const MIN_ITEMS: usize = 2;
}
