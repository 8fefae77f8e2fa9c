//! Task list store and its validation rules.
//!
//! # Responsibility
//! - Own the authoritative ordered task list.
//! - Enforce text invariants on every mutation and report failures as
//!   typed results the presentation layer can render.
//!
//! # Invariants
//! - Task text is trimmed and non-empty after every successful mutation.
//! - No two tasks compare equal under case-insensitive text comparison.
//! - A rejected mutation leaves the list unchanged.

use crate::ident::{IdGenerator, UuidIdGenerator};
use crate::model::task::{Task, TaskId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Detached snapshot of the full task list, in insertion order.
pub type TaskList = Vec<Task>;

pub type StoreResult<T> = Result<T, ValidationError>;

/// Validation failure reported synchronously to the caller.
///
/// None of these are fatal: the worst case is a rejected mutation with
/// the list left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace-only after trimming.
    EmptyTask,
    /// Another task already carries this text under case-insensitive
    /// comparison. Holds the stored text of the colliding task.
    DuplicateTask { text: String },
    /// `edit` addressed an id that is not in the list.
    NotFound(TaskId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTask => write!(f, "task cannot be empty"),
            Self::DuplicateTask { text } => write!(f, "task already exists: {text}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for ValidationError {}

/// Authoritative owner of the to-do list.
///
/// Every mutation returns a fresh [`TaskList`] snapshot so the
/// presentation layer can re-render by plain value comparison; internal
/// state is never handed out mutably. Operations are synchronous and
/// atomic from the caller's perspective.
pub struct TaskListStore<G: IdGenerator = UuidIdGenerator> {
    tasks: Vec<Task>,
    ids: G,
}

impl TaskListStore<UuidIdGenerator> {
    /// Creates an empty store with random UUID identity assignment.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }
}

impl Default for TaskListStore<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TaskListStore<G> {
    /// Creates an empty store using the provided id generator.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
        }
    }

    /// Adds a new task from raw form input.
    ///
    /// # Contract
    /// - Trims `raw_text`; rejects empty input and case-insensitive
    ///   duplicates without changing the list.
    /// - On success the task is appended last with `completed = false`
    ///   and a freshly generated id.
    pub fn add(&mut self, raw_text: &str) -> StoreResult<TaskList> {
        let text = validate_text(raw_text)?;
        if let Some(existing) = self.find_by_text(&text, None) {
            return Err(ValidationError::DuplicateTask {
                text: existing.text.clone(),
            });
        }

        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text));
        debug!(
            "event=task_added module=store id={} count={}",
            id,
            self.tasks.len()
        );
        Ok(self.snapshot())
    }

    /// Replaces a task's text in place.
    ///
    /// Position and completion state are preserved. The task being edited
    /// is excluded from its own duplicate check, so re-saving unchanged
    /// text always succeeds.
    ///
    /// # Contract
    /// - Unknown ids fail with `NotFound` before any text validation.
    /// - Trims `raw_text`; rejects empty input and collisions with a
    ///   *different* task.
    pub fn edit(&mut self, id: TaskId, raw_text: &str) -> StoreResult<TaskList> {
        let Some(position) = self.position(id) else {
            return Err(ValidationError::NotFound(id));
        };

        let text = validate_text(raw_text)?;
        if let Some(existing) = self.find_by_text(&text, Some(id)) {
            return Err(ValidationError::DuplicateTask {
                text: existing.text.clone(),
            });
        }

        self.tasks[position].text = text;
        debug!("event=task_edited module=store id={id}");
        Ok(self.snapshot())
    }

    /// Removes the task with `id`.
    ///
    /// Unknown ids are a silent no-op; the caller still receives the
    /// current snapshot.
    pub fn delete(&mut self, id: TaskId) -> TaskList {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() != before {
            debug!(
                "event=task_deleted module=store id={} count={}",
                id,
                self.tasks.len()
            );
        }
        self.snapshot()
    }

    /// Flips `completed` on the task with `id`; silent no-op when absent.
    pub fn toggle_completed(&mut self, id: TaskId) -> TaskList {
        if let Some(position) = self.position(id) {
            self.tasks[position].toggle_completed();
            debug!(
                "event=task_toggled module=store id={} completed={}",
                id, self.tasks[position].completed
            );
        }
        self.snapshot()
    }

    /// Returns a detached copy of the current list.
    pub fn snapshot(&self) -> TaskList {
        self.tasks.clone()
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks currently in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Case-insensitive text lookup, optionally excluding one id so an
    /// edited task never collides with itself.
    fn find_by_text(&self, text: &str, exclude: Option<TaskId>) -> Option<&Task> {
        // Full Unicode lowercasing to match user expectations for
        // non-ASCII task text.
        let needle = text.to_lowercase();
        self.tasks
            .iter()
            .find(|task| exclude != Some(task.id) && task.text.to_lowercase() == needle)
    }
}

fn validate_text(raw_text: &str) -> Result<String, ValidationError> {
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTask);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{validate_text, ValidationError};
    use uuid::Uuid;

    #[test]
    fn validate_text_trims_surrounding_whitespace() {
        assert_eq!(
            validate_text("  Buy milk \t").expect("non-empty text should pass"),
            "Buy milk"
        );
    }

    #[test]
    fn validate_text_rejects_whitespace_only_input() {
        assert_eq!(validate_text(" \t\n"), Err(ValidationError::EmptyTask));
        assert_eq!(validate_text(""), Err(ValidationError::EmptyTask));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ValidationError::EmptyTask.to_string(), "task cannot be empty");
        assert_eq!(
            ValidationError::DuplicateTask {
                text: "Buy milk".to_string()
            }
            .to_string(),
            "task already exists: Buy milk"
        );

        let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        assert_eq!(
            ValidationError::NotFound(id).to_string(),
            format!("task not found: {id}")
        );
    }
}
