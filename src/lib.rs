//! Kanban board: a single-user board of fixed, ordered task lists.
//!
//! This crate provides the task-ordering and cross-list move engine that
//! keeps every list's ordering dense and unique, plus versioned local
//! persistence of the whole board.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board entities with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete storage implementations (memory, filesystem)
//!
//! # Modules
//!
//! - [`board`]: Board entities, ordering engine, persistence, and service
//! - [`config`]: Storage location and key resolution
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use kanban_board::board::{
//!     adapters::InMemoryKeyValueStore, domain::ListId, persistence::BoardRepository,
//!     services::BoardService,
//! };
//! use mockable::DefaultClock;
//!
//! let repository = BoardRepository::new(Arc::new(InMemoryKeyValueStore::new()));
//! let mut service = BoardService::open(repository, Arc::new(DefaultClock));
//! service.initialize().expect("initialize board");
//! service.add_task(ListId::Inbox, "write spec").expect("add task");
//!
//! let inbox = service.snapshot().list(ListId::Inbox).expect("inbox exists");
//! assert_eq!(inbox.tasks().first().map(|t| t.content()), Some("write spec"));
//! ```

pub mod board;
pub mod config;
