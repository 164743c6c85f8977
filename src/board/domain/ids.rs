//! Identifier types for the board domain.

use super::ListIdParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task card.
///
/// Freshly created tasks receive a random UUID rendered as text. Identifiers
/// read back from storage are kept verbatim, so any opaque string is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the fixed board columns.
///
/// Variant declaration order is the catalog order, so the derived `Ord`
/// sorts lists the way the board displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListId {
    /// Unsorted incoming work.
    Inbox,
    /// Work with a clear definition.
    Defined,
    /// Accepted but not scheduled.
    Backlog,
    /// Waiting on something external.
    Blocked,
    /// Currently being worked on.
    InProgress,
    /// Finished and awaiting verification.
    Validating,
    /// Completed.
    Done,
    /// Dropped without completion.
    Cancelled,
}

impl ListId {
    /// Every list identifier in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Inbox,
        Self::Defined,
        Self::Backlog,
        Self::Blocked,
        Self::InProgress,
        Self::Validating,
        Self::Done,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Defined => "defined",
            Self::Backlog => "backlog",
            Self::Blocked => "blocked",
            Self::InProgress => "inProgress",
            Self::Validating => "validating",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the display title used when the list is first created.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Defined => "Defined",
            Self::Backlog => "Backlog",
            Self::Blocked => "Blocked",
            Self::InProgress => "In Progress",
            Self::Validating => "Validating",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl TryFrom<&str> for ListId {
    type Error = ListIdParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "inbox" => Ok(Self::Inbox),
            "defined" => Ok(Self::Defined),
            "backlog" => Ok(Self::Backlog),
            "blocked" => Ok(Self::Blocked),
            "inProgress" | "in_progress" => Ok(Self::InProgress),
            "validating" => Ok(Self::Validating),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ListIdParseError(value.to_owned())),
        }
    }
}

impl std::str::FromStr for ListId {
    type Err = ListIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
