//! Todo domain model.
//!
//! # Responsibility
//! - Define the stored record and the insert payload.
//! - Own title normalization and validation rules.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused.
//! - `uid` is generated once on creation and never changes.
//! - `title` is non-empty after trimming.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Database-assigned surrogate key.
pub type TodoId = i64;

/// Validation failures for todo payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// Stored todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Secondary identifier, stable across updates.
    pub uid: Uuid,
    pub title: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds; bumped by title updates.
    pub updated_at: i64,
}

/// Insert payload; storage assigns `id` and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub uid: Uuid,
    pub title: String,
}

impl NewTodo {
    /// Builds a payload with a freshly generated `uid` and a normalized title.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank after trimming.
    pub fn new(title: &str) -> Result<Self, TodoValidationError> {
        Ok(Self {
            uid: Uuid::new_v4(),
            title: normalize_title(title)?,
        })
    }

    /// Re-checks invariants before persistence.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims surrounding whitespace (including the trailing newline of
/// interactively read input) and rejects blank titles.
pub fn normalize_title(raw: &str) -> Result<String, TodoValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
