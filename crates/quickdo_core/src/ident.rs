//! Id-generation seam for the task store.
//!
//! # Responsibility
//! - Supply globally-unique task identifiers to the store.
//! - Keep identity assignment swappable so tests can run deterministic
//!   sequences.

use crate::model::task::TaskId;
use uuid::Uuid;

/// Source of fresh task identifiers.
///
/// The store treats id generation as an opaque collaborator: it only
/// requires that no identifier is handed out twice.
pub trait IdGenerator {
    /// Returns an identifier this generator has never returned before.
    fn next_id(&mut self) -> TaskId;
}

/// Default generator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        Uuid::new_v4()
    }
}
