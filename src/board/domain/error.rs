//! Error types for board domain parsing and invariant checks.

use super::{ListId, TaskId};
use thiserror::Error;

/// Error returned while parsing a list identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown list identifier: {0}")]
pub struct ListIdParseError(pub String);

/// A broken board invariant, reported by [`super::Board::check_invariants`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A list is stored under a key that differs from its own identifier.
    #[error("list stored under {key} reports identifier {actual}")]
    ListKeyMismatch {
        /// The map key the list is stored under.
        key: ListId,
        /// The identifier recorded on the list itself.
        actual: ListId,
    },

    /// A task's cached order does not match its position.
    #[error("task {task} in {list} has order {order}, expected {expected}")]
    OrderMismatch {
        /// The list containing the task.
        list: ListId,
        /// The offending task.
        task: TaskId,
        /// The cached order value.
        order: usize,
        /// The task's position in the list sequence.
        expected: usize,
    },

    /// A task's list reference does not match the list containing it.
    #[error("task {task} is held by {holder} but references {referenced}")]
    MembershipMismatch {
        /// The offending task.
        task: TaskId,
        /// The list whose sequence contains the task.
        holder: ListId,
        /// The list recorded on the task.
        referenced: ListId,
    },

    /// The same task identifier appears more than once on the board.
    #[error("task {0} appears more than once on the board")]
    DuplicateTask(TaskId),
}
