//! Versioned board envelope and its stored JSON shape.

use crate::board::domain::Board;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Fixed key the board record is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "kanban-store";

/// The board plus the bookkeeping persisted alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEnvelope {
    schema_version: u32,
    last_synced_at: Option<DateTime<Utc>>,
    board: Board,
}

impl BoardEnvelope {
    /// Creates an envelope around an empty board at the current version.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            last_synced_at: None,
            board: Board::new(),
        }
    }

    /// Creates an envelope at the current schema version.
    #[must_use]
    pub fn new(board: Board, last_synced_at: Option<DateTime<Utc>>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            last_synced_at,
            board,
        }
    }

    /// Returns the schema version of this envelope.
    #[must_use]
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Returns when the board was last stamped as synced.
    #[must_use]
    pub const fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Returns the board snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Installs a new board and stamps the sync time.
    pub(crate) fn replace_board(&mut self, board: Board, clock: &impl Clock) {
        self.board = board;
        self.last_synced_at = Some(clock.utc());
    }
}

impl Default for BoardEnvelope {
    fn default() -> Self {
        Self::empty()
    }
}

/// Stored record: `{ "state": { ... }, "version": n }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredRecord {
    pub(crate) state: StoredState,
    pub(crate) version: u32,
}

/// Inner state object of a [`StoredRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredState {
    #[serde(default)]
    pub(crate) version: u32,
    #[serde(default)]
    pub(crate) last_synced: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) lists: Board,
}

impl From<&BoardEnvelope> for StoredRecord {
    fn from(envelope: &BoardEnvelope) -> Self {
        Self {
            state: StoredState {
                version: envelope.schema_version,
                last_synced: envelope.last_synced_at,
                lists: envelope.board.clone(),
            },
            version: envelope.schema_version,
        }
    }
}

impl From<StoredRecord> for BoardEnvelope {
    fn from(record: StoredRecord) -> Self {
        Self {
            schema_version: record.version,
            last_synced_at: record.state.last_synced,
            board: record.state.lists.normalized(),
        }
    }
}
