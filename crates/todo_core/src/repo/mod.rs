//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts keyed by typed `TodoId`.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod todo_repo;
