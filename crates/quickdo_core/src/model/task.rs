//! Task domain model.
//!
//! # Responsibility
//! - Define the single record the store owns and snapshots.
//! - Provide a small lifecycle helper for completion state.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is stored trimmed; the store validates it before a task is
//!   constructed or updated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task in the list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single to-do item.
///
/// The store is the exclusive owner of task records; callers only ever
/// receive detached snapshot copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID used to address edit/delete/toggle operations.
    pub id: TaskId,
    /// Trimmed task text, unique case-insensitively across the list.
    pub text: String,
    /// Completion flag; the presentation layer renders completed tasks
    /// struck-through.
    pub completed: bool,
}

impl Task {
    /// Creates a pending task with a caller-provided stable ID.
    ///
    /// Ids are assigned through the store's [`IdGenerator`] seam; this
    /// constructor does not trim or validate `text`.
    ///
    /// [`IdGenerator`]: crate::ident::IdGenerator
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
