//! CLI error categories and their exit codes.

use std::error::Error;
use std::fmt::{Display, Formatter};
use todo_core::{DbError, RepoError, TodoServiceError};

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_FATAL: u8 = 3;

#[derive(Debug)]
pub enum CliError {
    /// Operation rejected or failed inside the core.
    Service(TodoServiceError),
    /// Database could not be connected or released.
    Fatal(DbError),
    /// Stdin closed before a prompted value was entered.
    MissingInput(&'static str),
    /// Reading the prompt answer failed.
    Prompt(std::io::Error),
    /// Writing results to the terminal failed.
    Output(std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Fatal(_) => EXIT_FATAL,
            Self::Service(_) | Self::MissingInput(_) | Self::Prompt(_) | Self::Output(_) => {
                EXIT_FAILURE
            }
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::Fatal(err) => write!(f, "database unavailable: {err}"),
            Self::MissingInput(what) => write!(f, "no {what} entered"),
            Self::Prompt(err) => write!(f, "failed to read input: {err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::Fatal(err) => Some(err),
            Self::MissingInput(_) => None,
            Self::Prompt(err) | Self::Output(err) => Some(err),
        }
    }
}

impl From<TodoServiceError> for CliError {
    fn from(value: TodoServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<RepoError> for CliError {
    fn from(value: RepoError) -> Self {
        Self::Service(value.into())
    }
}
