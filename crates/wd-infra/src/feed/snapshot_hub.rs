use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use wd_core::ids::UserId;
use wd_core::ports::{ClosetFeedPort, ItemRepositoryPort};
use wd_core::ClosetSnapshot;

const CHANNEL_CAPACITY: usize = 8;

/// In-process closet feed.
///
/// Every delivery is a full snapshot rebuilt from the item repository, never
/// a diff. Subscribers receive the current snapshot immediately on subscribe
/// and a fresh one on every `publish` for their owner. Slow subscribers that
/// let the channel fill are dropped rather than awaited; the next publish
/// simply no longer reaches them.
pub struct SnapshotHub {
    item_repo: Arc<dyn ItemRepositoryPort>,
    subscribers: Mutex<HashMap<UserId, Vec<mpsc::Sender<ClosetSnapshot>>>>,
}

impl SnapshotHub {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self {
            item_repo,
            subscribers: Mutex::new(HashMap::new()),
        }
    }

    async fn current_snapshot(&self, owner_id: &UserId) -> Result<ClosetSnapshot> {
        let items = self
            .item_repo
            .list_items_for_owner(owner_id)
            .await
            .context("failed to load items for snapshot")?;
        Ok(ClosetSnapshot::from_items(items))
    }

    /// Rebuild and fan out the owner's snapshot. Called after any mutation
    /// of the owner's closet.
    pub async fn publish(&self, owner_id: &UserId) -> Result<()> {
        let snapshot = self.current_snapshot(owner_id).await?;

        let mut subscribers = self.subscribers.lock().await;
        if let Some(senders) = subscribers.get_mut(owner_id) {
            senders.retain(|sender| match sender.try_send(snapshot.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    debug!(owner_id = %owner_id, "dropping lagging snapshot subscriber");
                    false
                }
                Err(mpsc::error::TrySendError::Closed(_)) => false,
            });
            if senders.is_empty() {
                subscribers.remove(owner_id);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ClosetFeedPort for SnapshotHub {
    async fn subscribe(&self, owner_id: &UserId) -> Result<mpsc::Receiver<ClosetSnapshot>> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

        let initial = self.current_snapshot(owner_id).await?;
        tx.send(initial)
            .await
            .context("failed to deliver initial snapshot")?;

        self.subscribers
            .lock()
            .await
            .entry(owner_id.clone())
            .or_default()
            .push(tx);

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::ids::ItemId;
    use wd_core::{Category, ClothingItem};

    struct StaticItemRepo {
        items: std::sync::Mutex<Vec<ClothingItem>>,
    }

    impl StaticItemRepo {
        fn with_items(items: Vec<ClothingItem>) -> Arc<Self> {
            Arc::new(Self {
                items: std::sync::Mutex::new(items),
            })
        }

        fn set_items(&self, items: Vec<ClothingItem>) {
            *self.items.lock().expect("items lock") = items;
        }
    }

    #[async_trait]
    impl ItemRepositoryPort for StaticItemRepo {
        async fn insert_item(&self, _item: &ClothingItem) -> Result<()> {
            unimplemented!("not used in tests")
        }

        async fn get_item(&self, _item_id: &ItemId) -> Result<Option<ClothingItem>> {
            unimplemented!("not used in tests")
        }

        async fn list_items_for_owner(&self, owner_id: &UserId) -> Result<Vec<ClothingItem>> {
            Ok(self
                .items
                .lock()
                .expect("items lock")
                .iter()
                .filter(|item| &item.owner_id == owner_id)
                .cloned()
                .collect())
        }

        async fn list_items_by_ids(&self, _item_ids: &[ItemId]) -> Result<Vec<ClothingItem>> {
            unimplemented!("not used in tests")
        }

        async fn delete_item(&self, _item_id: &ItemId) -> Result<()> {
            unimplemented!("not used in tests")
        }
    }

    fn item(owner: &str, category: Category) -> ClothingItem {
        ClothingItem {
            id: ItemId::new(),
            owner_id: UserId::from(owner),
            category,
            image_url: "https://storage.example.com/v0/b/x/o/a.png?alt=media".to_string(),
            is_public: false,
            created_at_ms: 0,
        }
    }

    #[tokio::test]
    async fn subscribe_delivers_current_snapshot_immediately() {
        let repo = StaticItemRepo::with_items(vec![
            item("owner-1", Category::Tops),
            item("owner-1", Category::Shoes),
            item("owner-2", Category::Dresses),
        ]);
        let hub = SnapshotHub::new(repo);

        let mut rx = hub.subscribe(&UserId::from("owner-1")).await.expect("subscribe");
        let snapshot = rx.recv().await.expect("initial snapshot");

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.items_in(Category::Tops).len(), 1);
        assert_eq!(snapshot.items_in(Category::Dresses).len(), 0);
    }

    #[tokio::test]
    async fn publish_fans_out_rebuilt_snapshot() {
        let repo = StaticItemRepo::with_items(vec![item("owner-1", Category::Tops)]);
        let hub = SnapshotHub::new(repo.clone());

        let owner = UserId::from("owner-1");
        let mut rx = hub.subscribe(&owner).await.expect("subscribe");
        rx.recv().await.expect("initial snapshot");

        repo.set_items(vec![
            item("owner-1", Category::Tops),
            item("owner-1", Category::Outerwear),
        ]);
        hub.publish(&owner).await.expect("publish");

        let snapshot = rx.recv().await.expect("published snapshot");
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn publish_for_other_owner_is_silent() {
        let repo = StaticItemRepo::with_items(vec![item("owner-1", Category::Tops)]);
        let hub = SnapshotHub::new(repo);

        let mut rx = hub.subscribe(&UserId::from("owner-1")).await.expect("subscribe");
        rx.recv().await.expect("initial snapshot");

        hub.publish(&UserId::from("owner-2")).await.expect("publish");
        assert!(rx.try_recv().is_err());
    }
}
