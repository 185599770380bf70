use std::time::Duration;

/// Failures surfaced by a [`VideoStore`](crate::store::VideoStore).
///
/// `RecordNotFound` and `EditConflict` are the sentinel outcomes callers are
/// expected to branch on. Everything else is a backend I/O failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    RecordNotFound,

    #[error("edit conflict: the record was modified or removed since it was read")]
    EditConflict,

    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl StoreError {
    /// `true` for lower-level storage failures (connectivity, constraint
    /// violations, timeouts) as opposed to the sentinel outcomes.
    pub fn is_backend_io(&self) -> bool {
        matches!(self, StoreError::Backend(_) | StoreError::Timeout { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
