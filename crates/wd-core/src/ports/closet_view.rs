use crate::ids::ItemId;

/// Seam towards whatever view is currently rendering the closet.
///
/// Synchronous on purpose: hiding or restoring a tile is an in-memory state
/// flip on the UI side, not an I/O operation.
pub trait ClosetViewPort: Send + Sync {
    /// Stop rendering the item's tile for the current pass.
    fn hide_item(&self, item_id: &ItemId);

    /// Render the item again, loading its image with a cache-bypassing
    /// freshness token appended to the reference.
    fn restore_item(&self, item_id: &ItemId, freshness_token: i64);
}
