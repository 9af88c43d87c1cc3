//! Command-line front end for `todo_core`.
//!
//! # Responsibility
//! - Parse arguments and resolve runtime configuration.
//! - Hold the database gateway for exactly one command.
//! - Route the command and render its result.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod present;
pub mod prompt;

pub use cli::{missing_command_usage, parse_cli, Cli, Command, OutputFormat};
pub use config::AppConfig;
pub use error::{CliError, EXIT_FAILURE, EXIT_FATAL, EXIT_USAGE};

use log::info;
use std::io::{BufRead, Write};
use todo_core::{DbTarget, Gateway, SqliteTodoRepository, TodoService};

/// Executes one command against a fresh gateway to `target`.
///
/// # Invariants
/// - The connection is released on every path; on success the release is
///   explicit so that a close failure surfaces as `CliError::Fatal`.
pub fn run(
    target: &DbTarget,
    command: &Command,
    format: OutputFormat,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut gateway = Gateway::new(target.clone());
    gateway.connect().map_err(CliError::Fatal)?;

    {
        let conn = gateway.connection().map_err(CliError::Fatal)?;
        let service = TodoService::new(SqliteTodoRepository::try_new(conn)?);
        dispatch::dispatch(command, &service, format, input, out)?;
    }

    gateway.disconnect().map_err(CliError::Fatal)?;
    info!("event=command_done module=cli status=ok");
    Ok(())
}
