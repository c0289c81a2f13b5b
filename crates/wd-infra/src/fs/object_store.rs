use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tokio::fs;

use wd_core::ports::{ObjectMeta, ObjectStoreError, ObjectStorePort};
use wd_core::StorageReference;

/// Everything that would corrupt the single encoded path segment of a
/// download URL, '/' and '%' included so parsing round-trips exactly.
const OBJECT_PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// Object store backed by a local directory tree.
///
/// Objects live at `<root>/<object path>` and are addressed through download
/// URLs of the shape `<base_url>/o/<encoded path>?alt=media&token=<uuid>`,
/// the same shape `StorageReference` parses back.
pub struct FsObjectStore {
    root: PathBuf,
    base_url: String,
}

impl FsObjectStore {
    pub fn new(root: PathBuf, base_url: impl Into<String>) -> Self {
        Self {
            root,
            base_url: base_url.into(),
        }
    }

    fn resolve(&self, path: &StorageReference) -> Result<PathBuf, ObjectStoreError> {
        // Object paths are bucket-relative; anything escaping the root is
        // refused outright.
        let relative = std::path::Path::new(path.as_str());
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ObjectStoreError::Other(format!(
                "refusing object path outside store root: {path}"
            )));
        }
        Ok(self.root.join(relative))
    }

    fn download_url(&self, path: &StorageReference) -> String {
        let encoded = utf8_percent_encode(path.as_str(), OBJECT_PATH_SET);
        let token = uuid::Uuid::new_v4();
        format!("{}/o/{encoded}?alt=media&token={token}", self.base_url)
    }
}

fn map_io_error(err: std::io::Error) -> ObjectStoreError {
    match err.kind() {
        ErrorKind::NotFound => ObjectStoreError::NotFound,
        ErrorKind::PermissionDenied => ObjectStoreError::PermissionDenied,
        _ => ObjectStoreError::Other(err.to_string()),
    }
}

#[async_trait]
impl ObjectStorePort for FsObjectStore {
    async fn head(&self, path: &StorageReference) -> Result<ObjectMeta, ObjectStoreError> {
        let target = self.resolve(path)?;
        let meta = fs::metadata(&target).await.map_err(map_io_error)?;
        if !meta.is_file() {
            return Err(ObjectStoreError::NotFound);
        }

        let updated_at_ms = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        Ok(ObjectMeta {
            size: meta.len(),
            updated_at_ms,
        })
    }

    async fn put(
        &self,
        path: &StorageReference,
        bytes: Vec<u8>,
    ) -> Result<String, ObjectStoreError> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(map_io_error)?;
        }
        fs::write(&target, bytes).await.map_err(map_io_error)?;

        Ok(self.download_url(path))
    }

    async fn delete(&self, path: &StorageReference) -> Result<(), ObjectStoreError> {
        let target = self.resolve(path)?;
        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            // Already gone counts as deleted.
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(map_io_error(err)),
        }
    }
}
