//! Tri-state result of probing whether a stored object still exists.

/// Outcome of an existence probe against the object store.
///
/// Only `ConfirmedAbsent` ever authorizes a destructive action. `Unknown`
/// covers every inconclusive failure mode (permission, network, throttling)
/// and must never cause a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistenceVerdict {
    /// The store served metadata for the object.
    Exists,
    /// The store authoritatively reported the object as missing.
    ConfirmedAbsent,
    /// The probe failed for a reason other than "not found".
    Unknown,
}

impl ExistenceVerdict {
    /// Whether this verdict permits deleting the owning record and file.
    pub fn authorizes_delete(self) -> bool {
        matches!(self, ExistenceVerdict::ConfirmedAbsent)
    }
}
