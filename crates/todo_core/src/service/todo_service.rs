//! Todo use-case service.
//!
//! # Responsibility
//! - Accept command-level input (raw id strings, raw titles).
//! - Validate ids and normalize titles before delegating to the repository.
//!
//! # Invariants
//! - A malformed id never reaches the repository.
//! - Create and update apply the same title normalization.
//! - Fetching a missing todo is `Ok(None)`; updating or deleting one is
//!   `NotFound`.

use crate::model::todo::{normalize_title, NewTodo, Todo, TodoId, TodoValidationError};
use crate::repo::todo_repo::{RepoError, TodoRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, TodoServiceError>;

/// Service error for todo use-cases.
#[derive(Debug)]
pub enum TodoServiceError {
    /// Id argument is not an integer.
    InvalidId(String),
    /// Target todo does not exist.
    NotFound(TodoId),
    /// Input rejected by model rules.
    Validation(TodoValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(raw) => write!(f, "invalid todo id `{raw}`: expected an integer"),
            Self::NotFound(id) => write!(f, "todo {id} not found"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidId(_) | Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TodoValidationError> for TodoServiceError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for TodoServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for todo CRUD operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a todo from raw title input.
    ///
    /// # Contract
    /// - Title is trimmed; blank titles are rejected.
    /// - Returns the stored record with its assigned `id` and `uid`.
    pub fn create_todo(&self, title: &str) -> ServiceResult<Todo> {
        let new_todo = NewTodo::new(title)?;
        let created = self.repo.create_todo(&new_todo)?;
        info!(
            "event=todo_create module=service status=ok id={}",
            created.id
        );
        Ok(created)
    }

    /// Lists every todo in insertion order.
    pub fn list_todos(&self) -> ServiceResult<Vec<Todo>> {
        let todos = self.repo.list_todos()?;
        debug!(
            "event=todo_list module=service status=ok count={}",
            todos.len()
        );
        Ok(todos)
    }

    /// Gets one todo by raw id.
    pub fn get_todo(&self, raw_id: &str) -> ServiceResult<Option<Todo>> {
        let id = parse_todo_id(raw_id)?;
        Ok(self.repo.get_todo(id)?)
    }

    /// Replaces the title of an existing todo.
    ///
    /// # Contract
    /// - `id` and `uid` are left untouched.
    /// - Missing target yields `NotFound`.
    pub fn update_title(&self, raw_id: &str, title: &str) -> ServiceResult<()> {
        let id = parse_todo_id(raw_id)?;
        let title = normalize_title(title)?;
        self.repo.update_title(id, &title)?;
        info!("event=todo_update module=service status=ok id={id}");
        Ok(())
    }

    /// Hard-deletes a todo by raw id.
    pub fn delete_todo(&self, raw_id: &str) -> ServiceResult<()> {
        let id = parse_todo_id(raw_id)?;
        self.repo.delete_todo(id)?;
        info!("event=todo_delete module=service status=ok id={id}");
        Ok(())
    }
}

/// Parses a command-line id argument.
///
/// Surrounding whitespace is tolerated; anything else that is not an `i64`
/// yields `InvalidId`.
pub fn parse_todo_id(raw: &str) -> ServiceResult<TodoId> {
    raw.trim().parse::<TodoId>().map_err(|_| {
        warn!("event=todo_id_parse module=service status=error reason=not_integer");
        TodoServiceError::InvalidId(raw.to_string())
    })
}
