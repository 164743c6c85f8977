//! Error types for board persistence.

use crate::board::ports::StoreError;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while migrating a stored record between schema versions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MigrationError {
    /// The stored record is newer than this build understands.
    #[error("stored schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in storage.
        found: u32,
        /// Highest version this build can read.
        supported: u32,
    },

    /// No migration is registered for a version on the upgrade path.
    #[error("no migration registered from schema version {0}")]
    MissingStep(u32),

    /// The record does not have the shape a migration expects.
    #[error("malformed stored record: {0}")]
    Malformed(String),
}

impl MigrationError {
    /// Creates a malformed-record error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors returned by the board persistence adapter.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The key-value store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored text is not a valid board record.
    #[error("board record codec error: {0}")]
    Codec(Arc<serde_json::Error>),

    /// The stored record could not be migrated.
    #[error(transparent)]
    Migration(#[from] MigrationError),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(Arc::new(err))
    }
}
