//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the persistence
//! adapter and board service.

pub mod store;

pub use store::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use store::MockKeyValueStore;
