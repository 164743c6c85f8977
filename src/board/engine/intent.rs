//! Intents accepted by the ordering engine and the results it reports.

use crate::board::domain::{Board, ListId, TaskId};
use std::fmt;

/// A discrete request to mutate the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Populate every catalog list when the board is empty.
    Initialize,
    /// Append a new task to a list.
    AddTask {
        /// Target list.
        list_id: ListId,
        /// Task content. The engine does not validate it.
        content: String,
    },
    /// Replace the content of an existing task.
    UpdateTask {
        /// Task to rewrite.
        task_id: TaskId,
        /// Replacement content.
        content: String,
    },
    /// Remove a task from the board.
    DeleteTask {
        /// Task to remove.
        task_id: TaskId,
    },
    /// Move a task from one list into another at a given index.
    MoveTask {
        /// Task to move.
        task_id: TaskId,
        /// List currently holding the task.
        from: ListId,
        /// Destination list.
        to: ListId,
        /// Destination index, clamped to the destination length.
        index: usize,
    },
    /// Move a task to another position within the same list.
    ReorderTask {
        /// List to reorder.
        list_id: ListId,
        /// Current index of the task.
        old_index: usize,
        /// Target index, clamped to the list length.
        new_index: usize,
    },
}

impl Intent {
    /// Returns the intent name used in log events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::AddTask { .. } => "add_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::MoveTask { .. } => "move_task",
            Self::ReorderTask { .. } => "reorder_task",
        }
    }
}

/// Why an intent left the board unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The board already holds lists.
    AlreadyInitialized,
    /// The referenced list does not exist on the board.
    ListNotFound(ListId),
    /// The referenced task does not exist on the board.
    TaskNotFound(TaskId),
    /// The task is not held by the list named as its source.
    TaskNotInList {
        /// The task that was looked up.
        task_id: TaskId,
        /// The list that was searched.
        list_id: ListId,
    },
    /// The index does not address a task in the list.
    IndexOutOfRange {
        /// The list that was addressed.
        list_id: ListId,
        /// The requested index.
        index: usize,
        /// The list length at the time of the request.
        len: usize,
    },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => f.write_str("board already initialized"),
            Self::ListNotFound(list_id) => write!(f, "list not found: {list_id}"),
            Self::TaskNotFound(task_id) => write!(f, "task not found: {task_id}"),
            Self::TaskNotInList { task_id, list_id } => {
                write!(f, "task {task_id} is not in list {list_id}")
            }
            Self::IndexOutOfRange {
                list_id,
                index,
                len,
            } => write!(f, "index {index} out of range for {list_id} (len {len})"),
        }
    }
}

/// Result of applying an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The board changed.
    Applied,
    /// The intent referenced something that does not exist; nothing changed.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Returns `true` when the intent changed the board.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// A new board snapshot paired with the outcome that produced it.
///
/// Ignored intents carry an unchanged copy of the input board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    board: Board,
    outcome: Outcome,
}

impl Transition {
    pub(crate) fn applied(board: Board) -> Self {
        Self {
            board,
            outcome: Outcome::Applied,
        }
    }

    pub(crate) fn ignored(board: &Board, reason: IgnoreReason) -> Self {
        Self {
            board: board.clone(),
            outcome: Outcome::Ignored(reason),
        }
    }

    /// Returns the resulting board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the outcome.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Splits the transition into its board and outcome.
    #[must_use]
    pub fn into_parts(self) -> (Board, Outcome) {
        (self.board, self.outcome)
    }

    /// Discards the outcome and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
