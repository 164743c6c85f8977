//! Board column entity.

use super::{ListId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A named column holding an ordered sequence of tasks.
///
/// The sequence is authoritative. Every constructor that accepts tasks
/// restamps each task's `list_id` and `order` from its position, so a `List`
/// never exposes stale cached positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    id: ListId,
    title: String,
    tasks: Vec<Task>,
}

impl List {
    /// Creates an empty list with the catalog title for `id`.
    #[must_use]
    pub fn empty(id: ListId) -> Self {
        Self {
            id,
            title: id.title().to_owned(),
            tasks: Vec::new(),
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the index of the task with the given identifier.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    /// Returns a copy of this list holding `tasks`, renumbered from zero.
    pub(crate) fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        let mut list = Self {
            id: self.id,
            title: self.title.clone(),
            tasks,
        };
        list.renumber();
        list
    }

    /// Restamps the identifier and every task position after loading.
    pub(crate) fn normalized(mut self, id: ListId) -> Self {
        self.id = id;
        self.renumber();
        self
    }

    fn renumber(&mut self) {
        let id = self.id;
        for (order, task) in self.tasks.iter_mut().enumerate() {
            task.place(id, order);
        }
    }
}
