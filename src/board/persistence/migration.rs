//! Forward migrations for stored board records.
//!
//! Migrations operate on raw JSON so a step can reshape records that no
//! longer deserialize into the current types. Each step upgrades exactly one
//! version; [`MigrationChain`] runs steps in sequence until the record
//! reaches the target version.

use super::{CURRENT_SCHEMA_VERSION, MigrationError};
use serde_json::Value;
use std::collections::BTreeMap;

/// Result type for migration operations.
pub type MigrationResult<T> = Result<T, MigrationError>;

/// One forward step from `source_version()` to `source_version() + 1`.
pub trait SchemaMigration: Send + Sync {
    /// Returns the version this step reads.
    fn source_version(&self) -> u32;

    /// Transforms a record at `source_version()` into the next version.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::Malformed`] when the record does not have
    /// the expected shape.
    fn migrate(&self, record: Value) -> MigrationResult<Value>;
}

/// Migration that only stamps the next version number.
///
/// The record shape is unchanged. Both the outer `version` and
/// `state.version` fields are rewritten.
#[derive(Debug, Clone, Copy)]
pub struct StampVersion {
    source: u32,
}

impl StampVersion {
    /// Creates a stamping step reading records at `source`.
    #[must_use]
    pub const fn from_version(source: u32) -> Self {
        Self { source }
    }
}

impl SchemaMigration for StampVersion {
    fn source_version(&self) -> u32 {
        self.source
    }

    fn migrate(&self, mut record: Value) -> MigrationResult<Value> {
        let target = Value::from(self.source.saturating_add(1));
        let root = record
            .as_object_mut()
            .ok_or_else(|| MigrationError::malformed("expected record to be an object"))?;
        root.insert("version".to_owned(), target.clone());
        if let Some(state) = root.get_mut("state").and_then(Value::as_object_mut) {
            state.insert("version".to_owned(), target);
        }
        Ok(record)
    }
}

/// Ordered set of migrations keyed by source version.
pub struct MigrationChain {
    target: u32,
    steps: BTreeMap<u32, Box<dyn SchemaMigration>>,
}

impl MigrationChain {
    /// Creates the chain used by this build.
    ///
    /// Records written before versioning (version `0`) are stamped forward
    /// unchanged.
    #[must_use]
    pub fn new() -> Self {
        let mut chain = Self::empty(CURRENT_SCHEMA_VERSION);
        chain.register(Box::new(StampVersion::from_version(0)));
        chain
    }

    /// Creates a chain with no steps that upgrades to `target`.
    #[must_use]
    pub fn empty(target: u32) -> Self {
        Self {
            target,
            steps: BTreeMap::new(),
        }
    }

    /// Registers a step, replacing any step with the same source version.
    pub fn register(&mut self, step: Box<dyn SchemaMigration>) {
        self.steps.insert(step.source_version(), step);
    }

    /// Returns the version this chain upgrades records to.
    #[must_use]
    pub const fn target_version(&self) -> u32 {
        self.target
    }

    /// Reads the outer version of a stored record, defaulting to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::Malformed`] when the version is present but
    /// not a non-negative integer that fits in `u32`.
    pub fn record_version(record: &Value) -> MigrationResult<u32> {
        match record.get("version") {
            None | Some(Value::Null) => Ok(0),
            Some(raw) => raw
                .as_u64()
                .and_then(|version| u32::try_from(version).ok())
                .ok_or_else(|| MigrationError::malformed(format!("invalid version {raw}"))),
        }
    }

    /// Upgrades a record to the target version.
    ///
    /// Records already at the target version are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::UnsupportedVersion`] for records newer than
    /// the target, [`MigrationError::MissingStep`] when the path has a gap,
    /// or any error raised by a step.
    pub fn upgrade(&self, mut record: Value) -> MigrationResult<Value> {
        let mut version = Self::record_version(&record)?;
        if version > self.target {
            return Err(MigrationError::UnsupportedVersion {
                found: version,
                supported: self.target,
            });
        }
        while version < self.target {
            let step = self
                .steps
                .get(&version)
                .ok_or(MigrationError::MissingStep(version))?;
            record = step.migrate(record)?;
            tracing::debug!(from = version, to = version + 1, "migrated board record");
            version += 1;
        }
        Ok(record)
    }
}

impl Default for MigrationChain {
    fn default() -> Self {
        Self::new()
    }
}
