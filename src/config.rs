//! Storage configuration for file-backed boards.
//!
//! Values resolve from defaults, then environment variables, then explicit
//! overrides applied by the caller (typically CLI flags).

use camino::{Utf8Path, Utf8PathBuf};
use std::env::{self, VarError};
use thiserror::Error;

use crate::board::persistence::DEFAULT_STORAGE_KEY;

/// Environment variable naming the board data directory.
pub const DATA_DIR_ENV: &str = "KANBAN_DATA_DIR";

/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "KANBAN_STORAGE_KEY";

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = ".kanban";

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds bytes that are not valid UTF-8.
    #[error("environment variable {0} is not valid UTF-8")]
    NonUnicode(&'static str),

    /// The storage key is empty after trimming.
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

/// Where and under which key the board is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: Utf8PathBuf,
    storage_key: String,
}

impl StoreConfig {
    /// Resolves configuration from the process environment.
    ///
    /// Unset or blank variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonUnicode`] when a variable is set to
    /// non-UTF-8 bytes.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(data_dir) = read_env(DATA_DIR_ENV)? {
            config.data_dir = Utf8PathBuf::from(data_dir);
        }
        if let Some(storage_key) = read_env(STORAGE_KEY_ENV)? {
            config.storage_key = storage_key;
        }
        Ok(config)
    }

    /// Overrides the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Overrides the storage key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`] when the key is blank.
    pub fn with_storage_key(mut self, storage_key: &str) -> Result<Self, ConfigError> {
        let trimmed = storage_key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        trimmed.clone_into(&mut self.storage_key);
        Ok(self)
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Returns the storage key.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

fn read_env(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(name)),
    }
}
