use async_trait::async_trait;
use std::sync::Arc;

use crate::ports::errors::ObjectStoreError;
use crate::storage_ref::StorageReference;

/// Metadata served by an existence probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMeta {
    pub size: u64,
    pub updated_at_ms: i64,
}

/// Blob-store side of the backend contract.
///
/// `delete` is idempotent: adapters map an already-missing object to success
/// so best-effort cleanup never trips over its own earlier work.
#[async_trait]
pub trait ObjectStorePort: Send + Sync {
    /// Read-only existence probe for the object at `path`.
    async fn head(&self, path: &StorageReference) -> Result<ObjectMeta, ObjectStoreError>;

    /// Store bytes at `path`, returning the object's download URL.
    async fn put(&self, path: &StorageReference, bytes: Vec<u8>)
        -> Result<String, ObjectStoreError>;

    async fn delete(&self, path: &StorageReference) -> Result<(), ObjectStoreError>;
}

#[async_trait]
impl<T: ObjectStorePort + ?Sized> ObjectStorePort for Arc<T> {
    async fn head(&self, path: &StorageReference) -> Result<ObjectMeta, ObjectStoreError> {
        (**self).head(path).await
    }

    async fn put(
        &self,
        path: &StorageReference,
        bytes: Vec<u8>,
    ) -> Result<String, ObjectStoreError> {
        (**self).put(path, bytes).await
    }

    async fn delete(&self, path: &StorageReference) -> Result<(), ObjectStoreError> {
        (**self).delete(path).await
    }
}
