//! Key-value storage port used by the persistence adapter.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable key-value storage holding text values.
///
/// Calls are synchronous and complete before returning. Implementations must
/// make a successful `set` visible to every later `get` on the same key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the underlying storage fails.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] when the key cannot be used by the
    /// backend or [`StoreError::Backend`] when the write fails.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The key cannot be mapped onto the backend's namespace.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Storage-layer failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
