//! Translation of drag-and-drop events into board intents.
//!
//! Pointer and keyboard capture stay outside this crate. This module
//! receives the discrete result of a drag (the dragged task and what it was
//! dropped over) and decides which engine intent, if any, that implies.

use crate::board::{
    domain::{Board, ListId, TaskId},
    engine::Intent,
};

/// What a dragged task was released or hovered over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The body of a list, not over any particular task.
    List(ListId),
    /// Another task card.
    Task {
        /// The hovered task.
        task_id: TaskId,
        /// The list the hovered card was rendered in, when the input layer
        /// knows it.
        container: Option<ListId>,
    },
}

impl DropTarget {
    /// Interprets a raw drop-zone identifier.
    ///
    /// Identifiers that name a catalog list are list targets; anything else
    /// is treated as a task identifier.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        ListId::try_from(raw).map_or_else(|_| Self::task(TaskId::from_raw(raw)), Self::List)
    }

    /// Creates a task target with no known container.
    #[must_use]
    pub const fn task(task_id: TaskId) -> Self {
        Self::Task {
            task_id,
            container: None,
        }
    }
}

/// Stage of the drag gesture an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// The pointer is hovering over a target while dragging.
    Over,
    /// The task was released.
    End,
}

/// Resolves a drag event into the intent it implies.
///
/// Hovering over another list moves the task there immediately, so the
/// destination previews it. Same-list reordering waits for the release.
/// When the hovered task has vanished (a stale event racing a delete or an
/// earlier move) but its container is known, the task is appended to the end
/// of that container.
#[must_use]
pub fn resolve_drop(
    board: &Board,
    active: &TaskId,
    target: &DropTarget,
    phase: DragPhase,
) -> Option<Intent> {
    let (from, old_index) = board.locate_task(active)?;

    match target {
        DropTarget::List(to) => {
            let destination = board.list(*to)?;
            if destination.id() == from {
                return None;
            }
            Some(Intent::MoveTask {
                task_id: active.clone(),
                from,
                to: *to,
                index: destination.len(),
            })
        }
        DropTarget::Task { task_id, container } => match board.locate_task(task_id) {
            Some((to, over_index)) if to != from => Some(Intent::MoveTask {
                task_id: active.clone(),
                from,
                to,
                index: over_index,
            }),
            Some((_, over_index)) => (phase == DragPhase::End && old_index != over_index).then(
                || Intent::ReorderTask {
                    list_id: from,
                    old_index,
                    new_index: over_index,
                },
            ),
            None => {
                let destination = board.list((*container)?)?;
                (destination.id() != from).then(|| Intent::MoveTask {
                    task_id: active.clone(),
                    from,
                    to: destination.id(),
                    index: destination.len(),
                })
            }
        },
    }
}

/// Trims user-entered task text, rejecting text that is empty once trimmed.
///
/// The engine accepts any content; input layers call this before issuing
/// add or update intents.
#[must_use]
pub fn normalize_content(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Resolves an edit of `task_id` into an update intent.
///
/// Returns `None` when the trimmed text is empty or matches the task's
/// current content, so saving an untouched editor never bumps `updatedAt`.
/// Unknown task ids still resolve, leaving the engine to report them.
#[must_use]
pub fn resolve_edit(board: &Board, task_id: &TaskId, raw: &str) -> Option<Intent> {
    let content = normalize_content(raw)?;
    if board
        .find_task(task_id)
        .is_some_and(|task| task.content() == content)
    {
        return None;
    }
    Some(Intent::UpdateTask {
        task_id: task_id.clone(),
        content,
    })
}
