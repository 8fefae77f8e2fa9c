//! Core domain logic for QuickDo.
//! This crate is the single source of truth for task-list invariants.

pub mod ident;
pub mod logging;
pub mod model;
pub mod store;

pub use ident::{IdGenerator, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use store::task_store::{StoreResult, TaskList, TaskListStore, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
