//! Board repository over a key-value store.

use super::{
    BoardEnvelope, DEFAULT_STORAGE_KEY, MigrationChain, PersistenceResult,
    envelope::StoredRecord,
};
use crate::board::ports::KeyValueStore;
use serde_json::Value;
use std::sync::Arc;

/// Encodes an envelope as the stored JSON record.
///
/// # Errors
///
/// Returns [`super::PersistenceError::Codec`] when serialization fails.
pub fn encode(envelope: &BoardEnvelope) -> PersistenceResult<String> {
    Ok(serde_json::to_string(&StoredRecord::from(envelope))?)
}

/// Decodes a stored JSON record, migrating it forward first.
///
/// The decoded board is renormalized: task positions and list references
/// are recomputed from the stored sequences.
///
/// # Errors
///
/// Returns [`super::PersistenceError::Codec`] for text that is not a valid
/// record, or [`super::PersistenceError::Migration`] when the record cannot
/// be upgraded.
pub fn decode(raw: &str, migrations: &MigrationChain) -> PersistenceResult<BoardEnvelope> {
    let value: Value = serde_json::from_str(raw)?;
    let upgraded = migrations.upgrade(value)?;
    let record: StoredRecord = serde_json::from_value(upgraded)?;
    Ok(BoardEnvelope::from(record))
}

/// Loads and saves the board envelope under a single storage key.
pub struct BoardRepository<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    key: String,
    migrations: MigrationChain,
}

impl<S> BoardRepository<S>
where
    S: KeyValueStore,
{
    /// Creates a repository using the default storage key and migrations.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Creates a repository storing the board under `key`.
    #[must_use]
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            migrations: MigrationChain::new(),
        }
    }

    /// Replaces the migration chain.
    #[must_use]
    pub fn with_migrations(mut self, migrations: MigrationChain) -> Self {
        self.migrations = migrations;
        self
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored envelope.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`super::PersistenceError`] when the store fails or the
    /// stored record cannot be decoded or migrated.
    pub fn load(&self) -> PersistenceResult<Option<BoardEnvelope>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        decode(&raw, &self.migrations).map(Some)
    }

    /// Writes the envelope, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns [`super::PersistenceError`] when encoding or the store write
    /// fails.
    pub fn save(&self, envelope: &BoardEnvelope) -> PersistenceResult<()> {
        let raw = encode(envelope)?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }
}
