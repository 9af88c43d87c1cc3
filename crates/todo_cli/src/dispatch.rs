//! Command dispatcher: one subcommand, one service call, formatted output.

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;
use crate::present::{render_todo, render_todos};
use crate::prompt::prompt_line;
use std::io::{BufRead, Write};
use todo_core::{parse_todo_id, TodoRepository, TodoService};

const TITLE_PROMPT: &str = "Enter the title: ";
const NEW_TITLE_PROMPT: &str = "Enter the new title: ";

/// Runs `command` against `service`, reading prompted values from `input`
/// and writing results to `out`.
///
/// A `get-todo` miss is reported on `out` and is not an error.
pub fn dispatch<R: TodoRepository>(
    command: &Command,
    service: &TodoService<R>,
    format: OutputFormat,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::All => {
            let todos = service.list_todos()?;
            render_todos(&todos, format, out).map_err(CliError::Output)
        }
        Command::Add { title } => {
            let title = match title {
                Some(title) => title.clone(),
                None => prompt_line(input, out, TITLE_PROMPT, "title")?,
            };
            let created = service.create_todo(&title)?;
            if format == OutputFormat::Json {
                return render_todo(&created, format, out).map_err(CliError::Output);
            }
            writeln!(out, "Todo added successfully! (id {})", created.id)
                .map_err(CliError::Output)
        }
        Command::GetTodo { id } => match service.get_todo(id)? {
            Some(todo) => render_todo(&todo, format, out).map_err(CliError::Output),
            None => writeln!(out, "Todo not found").map_err(CliError::Output),
        },
        Command::Update { id, title } => {
            // Reject a malformed id before asking for a title.
            parse_todo_id(id)?;
            let title = match title {
                Some(title) => title.clone(),
                None => prompt_line(input, out, NEW_TITLE_PROMPT, "title")?,
            };
            service.update_title(id, &title)?;
            writeln!(out, "Todo {} was updated", id.trim()).map_err(CliError::Output)
        }
        Command::Delete { id } => {
            service.delete_todo(id)?;
            writeln!(out, "Task with id {} was deleted", id.trim()).map_err(CliError::Output)
        }
    }
}
