use std::collections::BTreeMap;

use crate::wardrobe::{Category, ClothingItem};

/// A full snapshot of one owner's closet, grouped by category.
///
/// Feeds always deliver complete snapshots, never incremental diffs, so a
/// consumer can re-derive every decision from the latest snapshot alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosetSnapshot {
    items_by_category: BTreeMap<Category, Vec<ClothingItem>>,
}

impl ClosetSnapshot {
    /// Group a flat item list into a snapshot.
    pub fn from_items(items: Vec<ClothingItem>) -> Self {
        let mut items_by_category: BTreeMap<Category, Vec<ClothingItem>> = BTreeMap::new();
        for item in items {
            items_by_category.entry(item.category).or_default().push(item);
        }
        Self { items_by_category }
    }

    pub fn items_in(&self, category: Category) -> &[ClothingItem] {
        self.items_by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Flatten all categories into one sequential iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClothingItem> {
        self.items_by_category.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.items_by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items_by_category.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ItemId, UserId};

    fn item(category: Category) -> ClothingItem {
        ClothingItem {
            id: ItemId::new(),
            owner_id: UserId::from("owner-1"),
            category,
            image_url: "https://example.invalid/x".to_string(),
            is_public: false,
            created_at_ms: 0,
        }
    }

    #[test]
    fn groups_items_by_category() {
        let snapshot = ClosetSnapshot::from_items(vec![
            item(Category::Tops),
            item(Category::Shoes),
            item(Category::Tops),
        ]);

        assert_eq!(snapshot.items_in(Category::Tops).len(), 2);
        assert_eq!(snapshot.items_in(Category::Shoes).len(), 1);
        assert_eq!(snapshot.items_in(Category::Dresses).len(), 0);
        assert_eq!(snapshot.len(), 3);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn flat_iteration_covers_every_item_once() {
        let snapshot = ClosetSnapshot::from_items(vec![
            item(Category::Bottoms),
            item(Category::Accessories),
            item(Category::Outerwear),
        ]);

        assert_eq!(snapshot.iter().count(), 3);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = ClosetSnapshot::from_items(vec![]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
