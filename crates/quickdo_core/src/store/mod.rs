//! Task list state container.
//!
//! # Responsibility
//! - Expose the store that owns all task records.
//! - Keep validation rules next to the state they protect.

pub mod task_store;
