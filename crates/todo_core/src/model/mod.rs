//! Domain model for persisted todos.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every stored todo is identified by a database-assigned `TodoId` and a
//!   stable `uid`, neither of which changes after creation.

pub mod todo;
