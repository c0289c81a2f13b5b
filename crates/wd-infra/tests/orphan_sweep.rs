//! End-to-end orphan sweep over the real adapters: SQLite item records,
//! filesystem-backed objects, the production reconciler in between.

use std::sync::Arc;

use wd_app::usecases::{ReconcileOrphans, SweepOutcome};
use wd_core::ids::{ItemId, UserId};
use wd_core::ports::{ItemRepositoryPort, ObjectStorePort};
use wd_core::{
    Category, ClosetSnapshot, ClothingItem, MaintenanceConfig, StorageReference,
};
use wd_infra::db::pool::init_db_pool;
use wd_infra::db::repositories::DieselItemRepository;
use wd_infra::fs::FsObjectStore;
use wd_infra::SystemClock;

struct Fixture {
    _dir: tempfile::TempDir,
    repo: Arc<DieselItemRepository>,
    store: Arc<FsObjectStore>,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("wardrobe.db");
        let pool = init_db_pool(db_path.to_str().expect("utf8 path")).expect("db pool");

        let store = FsObjectStore::new(
            dir.path().join("objects"),
            "https://storage.example.com/v0/b/wardrobe",
        );

        Self {
            _dir: dir,
            repo: Arc::new(DieselItemRepository::new(pool)),
            store: Arc::new(store),
        }
    }

    /// Upload an image, record the item against its download URL.
    async fn add_item(&self, owner: &UserId, object_path: &str) -> ClothingItem {
        let reference = StorageReference::new(object_path);
        let url = self
            .store
            .put(&reference, b"png bytes".to_vec())
            .await
            .expect("put object");

        let item = ClothingItem {
            id: ItemId::new(),
            owner_id: owner.clone(),
            category: Category::Tops,
            image_url: url,
            is_public: false,
            created_at_ms: 0,
        };
        self.repo.insert_item(&item).await.expect("insert item");
        item
    }

    fn reconciler(&self) -> ReconcileOrphans {
        ReconcileOrphans::new(
            self.repo.clone(),
            self.store.clone(),
            Arc::new(SystemClock),
            &MaintenanceConfig::default(),
        )
    }

    async fn snapshot(&self, owner: &UserId) -> ClosetSnapshot {
        let items = self
            .repo
            .list_items_for_owner(owner)
            .await
            .expect("list items");
        ClosetSnapshot::from_items(items)
    }
}

#[tokio::test]
async fn sweep_removes_orphaned_record_and_keeps_healthy_one() {
    let fixture = Fixture::new();
    let owner = UserId::from("owner-1");

    let healthy = fixture.add_item(&owner, "clothing_items/owner-1/Tops/keep.png").await;
    let orphan = fixture.add_item(&owner, "clothing_items/owner-1/Tops/gone.png").await;

    // Remove the backing object out from under the second record.
    fixture
        .store
        .delete(&StorageReference::new("clothing_items/owner-1/Tops/gone.png"))
        .await
        .expect("delete object");

    let sweep = fixture.reconciler();
    let outcome = sweep.execute(&fixture.snapshot(&owner).await).await;

    let SweepOutcome::Completed(summary) = outcome else {
        panic!("first sweep must not be throttled");
    };
    assert_eq!(summary.probed, 2);
    assert_eq!(summary.deleted_records, 1);

    let remaining = fixture.snapshot(&owner).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.iter().next().expect("one item").id, healthy.id);
    assert!(fixture
        .repo
        .get_item(&orphan.id)
        .await
        .expect("get item")
        .is_none());
}

#[tokio::test]
async fn immediate_second_sweep_is_throttled() {
    let fixture = Fixture::new();
    let owner = UserId::from("owner-1");
    fixture.add_item(&owner, "clothing_items/owner-1/Tops/keep.png").await;

    let sweep = fixture.reconciler();
    let snapshot = fixture.snapshot(&owner).await;

    assert!(matches!(
        sweep.execute(&snapshot).await,
        SweepOutcome::Completed(_)
    ));
    assert_eq!(sweep.execute(&snapshot).await, SweepOutcome::Throttled);
}
