//! Kanban board state engine.
//!
//! A fixed catalog of lists holds ordered task cards. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure ordering transitions in [`engine`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Versioned storage in [`persistence`]
//! - The owning service in [`services`]
//! - Drag-and-drop translation in [`gesture`]

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod gesture;
pub mod persistence;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
