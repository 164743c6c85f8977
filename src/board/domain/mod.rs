//! Domain model for the kanban board.
//!
//! Lists, tasks, and their identifiers. The domain holds no infrastructure
//! concerns; all mutation rules live in [`crate::board::engine`].

mod board;
mod error;
mod ids;
mod list;
mod task;

pub use board::Board;
pub use error::{InvariantViolation, ListIdParseError};
pub use ids::{ListId, TaskId};
pub use list::List;
pub use task::Task;
