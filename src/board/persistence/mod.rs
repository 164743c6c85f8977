//! Versioned persistence of the board envelope.
//!
//! The envelope is stored as one JSON record under a fixed key:
//!
//! ```json
//! {
//!   "state": { "version": 1, "lastSynced": "2024-01-01T00:00:00Z", "lists": { } },
//!   "version": 1
//! }
//! ```
//!
//! Older records pass through a [`MigrationChain`] before they are
//! deserialized.

mod envelope;
mod error;
pub mod migration;
mod repository;

pub use envelope::{BoardEnvelope, CURRENT_SCHEMA_VERSION, DEFAULT_STORAGE_KEY};
pub use error::{MigrationError, PersistenceError, PersistenceResult};
pub use migration::{MigrationChain, SchemaMigration, StampVersion};
pub use repository::{BoardRepository, decode, encode};
