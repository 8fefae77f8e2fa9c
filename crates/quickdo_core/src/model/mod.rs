//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the canonical task record used by core business logic.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Text invariants (trimmed, non-empty, unique) are enforced by the
//!   store, not by the record itself.

pub mod task;
