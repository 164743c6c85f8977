//! Ordering engine for board mutations.
//!
//! Every operation is a pure function from a borrowed [`Board`] snapshot to
//! a [`Transition`] holding the next snapshot. Invalid references never
//! fail: the board comes back unchanged with [`Outcome::Ignored`] naming the
//! reason, so callers can log stale drag events without surfacing them.
//!
//! [`Board`]: crate::board::domain::Board

mod intent;
mod ordering;

pub use intent::{IgnoreReason, Intent, Outcome, Transition};
pub use ordering::{
    add_task, apply, delete_task, initialize, move_task, reorder_task, update_task,
};
