//! Task card entity.

use super::{ListId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work owned by exactly one list.
///
/// `order` caches the task's index in its list sequence. Only the ordering
/// engine changes it, together with `list_id`, whenever a sequence is
/// rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    content: String,
    list_id: ListId,
    order: usize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    synced_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task with a fresh identifier at the given position.
    #[must_use]
    pub fn new(
        list_id: ListId,
        content: impl Into<String>,
        order: usize,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            content: content.into(),
            list_id,
            order,
            created_at: timestamp,
            updated_at: timestamp,
            synced_at: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the free-text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the list this task belongs to.
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Returns the zero-based position within the owning list.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the task was last pushed to a remote, if ever.
    #[must_use]
    pub const fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.synced_at
    }

    /// Replaces the content and bumps `updated_at`.
    pub(crate) fn rewrite(&mut self, content: String, clock: &impl Clock) {
        self.content = content;
        self.touch(clock);
    }

    /// Records a move into `list_id` and bumps `updated_at`.
    pub(crate) fn relocate(&mut self, list_id: ListId, clock: &impl Clock) {
        self.list_id = list_id;
        self.touch(clock);
    }

    /// Stamps the cached position fields from the containing sequence.
    pub(crate) fn place(&mut self, list_id: ListId, order: usize) {
        self.list_id = list_id;
        self.order = order;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
