use thiserror::Error;

/// Failure kinds an object-store probe or mutation can report.
///
/// `NotFound` is the only authoritative "object is gone" signal; every other
/// variant is inconclusive and must never justify a delete downstream.
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("object not found")]
    NotFound,

    #[error("permission denied")]
    PermissionDenied,

    #[error("rate limited")]
    RateLimited,

    #[error("network error: {0}")]
    Network(String),

    #[error("object store error: {0}")]
    Other(String),
}

impl ObjectStoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ObjectStoreError::NotFound)
    }
}
