//! Service owning the live board and writing it through to storage.

use crate::board::{
    domain::{Board, ListId, TaskId},
    engine::{self, Intent, Outcome},
    persistence::{BoardEnvelope, BoardRepository, PersistenceError},
    ports::KeyValueStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The board changed in memory but could not be written to storage.
    #[error("board changed but was not persisted: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Owns the current board and applies intents to it.
///
/// Every applied intent replaces the in-memory envelope first and then saves
/// it. A failed save is reported, but the in-memory board keeps the change.
pub struct BoardService<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    repository: BoardRepository<S>,
    clock: Arc<C>,
    envelope: BoardEnvelope,
}

impl<S, C> BoardService<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Opens the board stored in `repository`.
    ///
    /// Missing, unreadable, or unmigratable records are logged and replaced
    /// by an empty board; call [`Self::initialize`] afterwards to populate
    /// the catalog lists.
    #[must_use]
    pub fn open(repository: BoardRepository<S>, clock: Arc<C>) -> Self {
        let envelope = match repository.load() {
            Ok(Some(envelope)) => {
                if let Err(violation) = envelope.board().check_invariants() {
                    tracing::debug!(%violation, "stored board violated an invariant");
                }
                tracing::debug!(
                    key = repository.key(),
                    tasks = envelope.board().task_count(),
                    "restored board"
                );
                envelope
            }
            Ok(None) => {
                tracing::debug!(key = repository.key(), "no stored board, starting fresh");
                BoardEnvelope::empty()
            }
            Err(err) => {
                tracing::warn!(key = repository.key(), error = %err, "discarding stored board");
                BoardEnvelope::empty()
            }
        };

        Self {
            repository,
            clock,
            envelope,
        }
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Board {
        self.envelope.board()
    }

    /// Returns the current envelope, including sync bookkeeping.
    #[must_use]
    pub const fn envelope(&self) -> &BoardEnvelope {
        &self.envelope
    }

    /// Applies an intent and writes the result through on change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] when the intent was applied
    /// but the board could not be saved.
    pub fn apply(&mut self, intent: Intent) -> BoardServiceResult<Outcome> {
        let name = intent.name();
        let (board, outcome) =
            engine::apply(self.envelope.board(), intent, &*self.clock).into_parts();

        match &outcome {
            Outcome::Applied => {
                self.envelope.replace_board(board, &*self.clock);
                tracing::debug!(intent = name, "applied board intent");
                if let Err(err) = self.repository.save(&self.envelope) {
                    tracing::warn!(intent = name, error = %err, "failed to persist board");
                    return Err(err.into());
                }
            }
            Outcome::Ignored(reason) => {
                tracing::debug!(intent = name, %reason, "ignored board intent");
            }
        }
        Ok(outcome)
    }

    /// Populates the catalog lists if the board is empty.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn initialize(&mut self) -> BoardServiceResult<Outcome> {
        self.apply(Intent::Initialize)
    }

    /// Appends a task to a list.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn add_task(
        &mut self,
        list_id: ListId,
        content: impl Into<String>,
    ) -> BoardServiceResult<Outcome> {
        self.apply(Intent::AddTask {
            list_id,
            content: content.into(),
        })
    }

    /// Replaces a task's content.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn update_task(
        &mut self,
        task_id: TaskId,
        content: impl Into<String>,
    ) -> BoardServiceResult<Outcome> {
        self.apply(Intent::UpdateTask {
            task_id,
            content: content.into(),
        })
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn delete_task(&mut self, task_id: TaskId) -> BoardServiceResult<Outcome> {
        self.apply(Intent::DeleteTask { task_id })
    }

    /// Moves a task between lists.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        from: ListId,
        to: ListId,
        index: usize,
    ) -> BoardServiceResult<Outcome> {
        self.apply(Intent::MoveTask {
            task_id,
            from,
            to,
            index,
        })
    }

    /// Reorders a task within one list.
    ///
    /// # Errors
    ///
    /// See [`Self::apply`].
    pub fn reorder_task(
        &mut self,
        list_id: ListId,
        old_index: usize,
        new_index: usize,
    ) -> BoardServiceResult<Outcome> {
        self.apply(Intent::ReorderTask {
            list_id,
            old_index,
            new_index,
        })
    }
}
