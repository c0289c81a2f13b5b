//! Use case for probing whether an item's backing image still exists.

use std::sync::Arc;

use tracing::warn;
use wd_core::ports::ObjectStorePort;
use wd_core::{ExistenceVerdict, StorageReference};

/// Existence prober.
///
/// Infallible by design: every failure mode collapses into a verdict, and
/// only an authoritative "not found" from the store ever yields
/// `ConfirmedAbsent`. URLs that do not parse as store references are treated
/// as existing so they can never become deletion candidates.
pub struct VerifyImageExists {
    object_store: Arc<dyn ObjectStorePort>,
}

impl VerifyImageExists {
    pub fn new(object_store: Arc<dyn ObjectStorePort>) -> Self {
        Self { object_store }
    }

    pub async fn execute(&self, image_url: &str) -> ExistenceVerdict {
        let Some(path) = StorageReference::from_download_url(image_url) else {
            // Not a recognized store reference; assume valid to avoid
            // unsafe deletes.
            return ExistenceVerdict::Exists;
        };

        match self.object_store.head(&path).await {
            Ok(_) => ExistenceVerdict::Exists,
            Err(err) if err.is_not_found() => ExistenceVerdict::ConfirmedAbsent,
            Err(err) => {
                warn!(path = %path, error = %err, "existence probe inconclusive");
                ExistenceVerdict::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wd_core::ports::{ObjectMeta, ObjectStoreError};

    struct MockObjectStore {
        head_result: fn() -> Result<ObjectMeta, ObjectStoreError>,
        head_calls: AtomicUsize,
    }

    impl MockObjectStore {
        fn with(head_result: fn() -> Result<ObjectMeta, ObjectStoreError>) -> Arc<Self> {
            Arc::new(Self {
                head_result,
                head_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ObjectStorePort for MockObjectStore {
        async fn head(&self, _path: &StorageReference) -> Result<ObjectMeta, ObjectStoreError> {
            self.head_calls.fetch_add(1, Ordering::SeqCst);
            (self.head_result)()
        }

        async fn put(
            &self,
            _path: &StorageReference,
            _bytes: Vec<u8>,
        ) -> Result<String, ObjectStoreError> {
            unimplemented!("not used in tests")
        }

        async fn delete(&self, _path: &StorageReference) -> Result<(), ObjectStoreError> {
            unimplemented!("not used in tests")
        }
    }

    const PARSABLE_URL: &str =
        "https://storage.example.com/v0/b/app/o/clothing_items%2Fu%2FTops%2Fa.png?alt=media";

    #[tokio::test]
    async fn unparsable_url_is_assumed_to_exist_without_probing() {
        let store = MockObjectStore::with(|| Err(ObjectStoreError::NotFound));
        let prober = VerifyImageExists::new(store.clone());

        let verdict = prober.execute("https://example.com/plain.png").await;

        assert_eq!(verdict, ExistenceVerdict::Exists);
        assert_eq!(store.head_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn served_metadata_means_exists() {
        let store = MockObjectStore::with(|| {
            Ok(ObjectMeta {
                size: 42,
                updated_at_ms: 1,
            })
        });
        let prober = VerifyImageExists::new(store);

        assert_eq!(prober.execute(PARSABLE_URL).await, ExistenceVerdict::Exists);
    }

    #[tokio::test]
    async fn not_found_is_confirmed_absent() {
        let store = MockObjectStore::with(|| Err(ObjectStoreError::NotFound));
        let prober = VerifyImageExists::new(store);

        assert_eq!(
            prober.execute(PARSABLE_URL).await,
            ExistenceVerdict::ConfirmedAbsent
        );
    }

    #[tokio::test]
    async fn every_other_failure_is_unknown() {
        for err in [
            || Err(ObjectStoreError::PermissionDenied),
            || Err(ObjectStoreError::RateLimited),
            (|| Err(ObjectStoreError::Network("timeout".to_string())))
                as fn() -> Result<ObjectMeta, ObjectStoreError>,
            || Err(ObjectStoreError::Other("boom".to_string())),
        ] {
            let prober = VerifyImageExists::new(MockObjectStore::with(err));
            assert_eq!(prober.execute(PARSABLE_URL).await, ExistenceVerdict::Unknown);
        }
    }
}
