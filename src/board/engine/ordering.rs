//! Pure state transitions over board snapshots.
//!
//! Each function borrows the current board and builds a new one. Lists that
//! change are rebuilt from fresh task vectors and renumbered, so `order` is
//! dense and `list_id` matches the holder in every returned board.

use super::{IgnoreReason, Intent, Transition};
use crate::board::domain::{Board, ListId, Task, TaskId};
use mockable::Clock;

/// Populates every catalog list when the board holds no lists.
#[must_use]
pub fn initialize(board: &Board) -> Transition {
    if !board.is_empty() {
        return Transition::ignored(board, IgnoreReason::AlreadyInitialized);
    }
    Transition::applied(Board::from_catalog())
}

/// Appends a new task to the end of `list_id`.
#[must_use]
pub fn add_task(
    board: &Board,
    list_id: ListId,
    content: impl Into<String>,
    clock: &impl Clock,
) -> Transition {
    let Some(list) = board.list(list_id) else {
        return Transition::ignored(board, IgnoreReason::ListNotFound(list_id));
    };

    let mut tasks = list.tasks().to_vec();
    tasks.push(Task::new(list_id, content, list.len(), clock));

    let mut next = board.clone();
    next.replace_tasks(list_id, tasks);
    Transition::applied(next)
}

/// Replaces the content of the first task matching `task_id`.
#[must_use]
pub fn update_task(
    board: &Board,
    task_id: &TaskId,
    content: impl Into<String>,
    clock: &impl Clock,
) -> Transition {
    let Some((list_id, index)) = board.locate_task(task_id) else {
        return Transition::ignored(board, IgnoreReason::TaskNotFound(task_id.clone()));
    };
    let Some(list) = board.list(list_id) else {
        return Transition::ignored(board, IgnoreReason::ListNotFound(list_id));
    };

    let mut tasks = list.tasks().to_vec();
    if let Some(task) = tasks.get_mut(index) {
        task.rewrite(content.into(), clock);
    }

    let mut next = board.clone();
    next.replace_tasks(list_id, tasks);
    Transition::applied(next)
}

/// Removes a task and closes the gap it leaves.
#[must_use]
pub fn delete_task(board: &Board, task_id: &TaskId) -> Transition {
    let Some((list_id, index)) = board.locate_task(task_id) else {
        return Transition::ignored(board, IgnoreReason::TaskNotFound(task_id.clone()));
    };
    let Some(list) = board.list(list_id) else {
        return Transition::ignored(board, IgnoreReason::ListNotFound(list_id));
    };

    let tasks = list
        .tasks()
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, task)| task.clone())
        .collect();

    let mut next = board.clone();
    next.replace_tasks(list_id, tasks);
    Transition::applied(next)
}

/// Moves a task out of `from` and into `to` at `index`.
///
/// `index` is clamped to the destination length, measured after the task has
/// been removed from its source. Both affected lists are renumbered.
#[must_use]
pub fn move_task(
    board: &Board,
    task_id: &TaskId,
    from: ListId,
    to: ListId,
    index: usize,
    clock: &impl Clock,
) -> Transition {
    let Some(source) = board.list(from) else {
        return Transition::ignored(board, IgnoreReason::ListNotFound(from));
    };
    let Some(destination) = board.list(to) else {
        return Transition::ignored(board, IgnoreReason::ListNotFound(to));
    };
    let Some(position) = source.position_of(task_id) else {
        return Transition::ignored(
            board,
            IgnoreReason::TaskNotInList {
                task_id: task_id.clone(),
                list_id: from,
            },
        );
    };

    let mut remaining = source.tasks().to_vec();
    let mut task = remaining.remove(position);
    task.relocate(to, clock);

    let mut next = board.clone();
    if from == to {
        insert_clamped(&mut remaining, index, task);
        next.replace_tasks(to, remaining);
    } else {
        let mut targets = destination.tasks().to_vec();
        insert_clamped(&mut targets, index, task);
        next.replace_tasks(from, remaining);
        next.replace_tasks(to, targets);
    }
    Transition::applied(next)
}

/// Moves the task at `old_index` to `new_index` within one list.
///
/// `new_index` is clamped to the list length after removal.
#[must_use]
pub fn reorder_task(
    board: &Board,
    list_id: ListId,
    old_index: usize,
    new_index: usize,
    clock: &impl Clock,
) -> Transition {
    let Some(list) = board.list(list_id) else {
        return Transition::ignored(board, IgnoreReason::ListNotFound(list_id));
    };
    if old_index >= list.len() {
        return Transition::ignored(
            board,
            IgnoreReason::IndexOutOfRange {
                list_id,
                index: old_index,
                len: list.len(),
            },
        );
    }

    let mut tasks = list.tasks().to_vec();
    let mut task = tasks.remove(old_index);
    task.touch(clock);
    insert_clamped(&mut tasks, new_index, task);

    let mut next = board.clone();
    next.replace_tasks(list_id, tasks);
    Transition::applied(next)
}

/// Applies any [`Intent`] to a board snapshot.
#[must_use]
pub fn apply(board: &Board, intent: Intent, clock: &impl Clock) -> Transition {
    match intent {
        Intent::Initialize => initialize(board),
        Intent::AddTask { list_id, content } => add_task(board, list_id, content, clock),
        Intent::UpdateTask { task_id, content } => update_task(board, &task_id, content, clock),
        Intent::DeleteTask { task_id } => delete_task(board, &task_id),
        Intent::MoveTask {
            task_id,
            from,
            to,
            index,
        } => move_task(board, &task_id, from, to, index, clock),
        Intent::ReorderTask {
            list_id,
            old_index,
            new_index,
        } => reorder_task(board, list_id, old_index, new_index, clock),
    }
}

fn insert_clamped(tasks: &mut Vec<Task>, index: usize, task: Task) {
    let position = index.min(tasks.len());
    tasks.insert(position, task);
}
