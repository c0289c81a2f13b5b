//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of a clothing item record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of a saved outfit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutfitId(String);

/// Identifier of an account owning items and outfits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

id_macro::impl_id!(ItemId, OutfitId, UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn id_round_trips_through_string() {
        let id = ItemId::from("abc-123");
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(ItemId::from(id.clone().into_inner()), id);
    }
}
