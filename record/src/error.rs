//! Error taxonomy for record storage.
//!
//! "No stored record" is not an error; see [`crate::LoadOutcome::NotFound`].

/// Failure reported by a [`crate::RecordStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend rejected the access (quota exceeded, storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error returned by [`crate::FormRecordStore::persist`] and
/// [`crate::FormRecordStore::load`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The storage backend refused the read or write.
    #[error(transparent)]
    StorageUnavailable(#[from] StorageError),
    /// A stored value exists but is not a flat record of strings and booleans.
    #[error("stored record is corrupt: {0}")]
    CorruptRecord(#[source] serde_json::Error),
}
