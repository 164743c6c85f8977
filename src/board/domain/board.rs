//! Board aggregate: every list and its tasks at one point in time.

use super::{InvariantViolation, List, ListId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mapping from list identifier to list.
///
/// At most one list exists per identifier. A board may be partially
/// populated when read from storage; [`crate::board::engine::initialize`]
/// fills an empty board from the catalog. Lists iterate in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    lists: BTreeMap<ListId, List>,
}

impl Board {
    /// Creates a board with no lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board holding an empty list for every catalog entry.
    #[must_use]
    pub fn from_catalog() -> Self {
        let lists = ListId::ALL
            .into_iter()
            .map(|id| (id, List::empty(id)))
            .collect();
        Self { lists }
    }

    /// Returns `true` when no list has been populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns the list with the given identifier, if present.
    #[must_use]
    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.get(&id)
    }

    /// Iterates the populated lists in catalog order.
    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.lists.values()
    }

    /// Returns the total number of tasks across every list.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.lists.values().map(List::len).sum()
    }

    /// Finds a task anywhere on the board.
    ///
    /// Lists are scanned in catalog order and the first match wins.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<&Task> {
        self.lists
            .values()
            .flat_map(List::tasks)
            .find(|task| task.id() == task_id)
    }

    /// Returns the list holding a task and the task's index within it.
    #[must_use]
    pub fn locate_task(&self, task_id: &TaskId) -> Option<(ListId, usize)> {
        self.lists
            .values()
            .find_map(|list| list.position_of(task_id).map(|index| (list.id(), index)))
    }

    /// Verifies key consistency, order density, membership, and id
    /// uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found, scanning lists in
    /// catalog order.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::new();
        for (key, list) in &self.lists {
            if list.id() != *key {
                return Err(InvariantViolation::ListKeyMismatch {
                    key: *key,
                    actual: list.id(),
                });
            }
            for (expected, task) in list.tasks().iter().enumerate() {
                if task.order() != expected {
                    return Err(InvariantViolation::OrderMismatch {
                        list: *key,
                        task: task.id().clone(),
                        order: task.order(),
                        expected,
                    });
                }
                if task.list_id() != *key {
                    return Err(InvariantViolation::MembershipMismatch {
                        task: task.id().clone(),
                        holder: *key,
                        referenced: task.list_id(),
                    });
                }
                if !seen.insert(task.id()) {
                    return Err(InvariantViolation::DuplicateTask(task.id().clone()));
                }
            }
        }
        Ok(())
    }

    /// Replaces the task sequence of an existing list, renumbering it.
    ///
    /// Does nothing when the list is absent.
    pub(crate) fn replace_tasks(&mut self, id: ListId, tasks: Vec<Task>) {
        if let Some(list) = self.lists.get_mut(&id) {
            *list = list.with_tasks(tasks);
        }
    }

    /// Restamps every list identifier and task position from the map
    /// structure.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        let lists = self
            .lists
            .into_iter()
            .map(|(id, list)| (id, list.normalized(id)))
            .collect();
        Self { lists }
    }
}
