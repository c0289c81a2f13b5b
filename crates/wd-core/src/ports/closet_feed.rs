use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::ids::UserId;
use crate::wardrobe::ClosetSnapshot;

/// Live feed of one owner's closet.
///
/// Every delivery is a complete snapshot of the matching records, never a
/// diff. Implementations send the current snapshot immediately on subscribe
/// and a fresh one after each change.
#[async_trait]
pub trait ClosetFeedPort: Send + Sync {
    async fn subscribe(&self, owner_id: &UserId) -> Result<mpsc::Receiver<ClosetSnapshot>>;
}
