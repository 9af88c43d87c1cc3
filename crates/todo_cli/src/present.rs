//! Rendering of todos for the terminal.

use crate::cli::OutputFormat;
use console::{measure_text_width, pad_str, Alignment};
use std::io::{self, Write};
use todo_core::Todo;

const EMPTY_MESSAGE: &str = "No todos yet";
const HEADERS: [&str; 3] = ["ID", "Title", "UID"];

/// Renders a list of todos.
pub fn render_todos(todos: &[Todo], format: OutputFormat, out: &mut dyn Write) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(&todos, out),
        _ if todos.is_empty() => writeln!(out, "{EMPTY_MESSAGE}"),
        OutputFormat::Table => write_table(todos, out),
        OutputFormat::Plain => write_plain(todos, out),
    }
}

/// Renders one todo; JSON output is an object rather than an array.
pub fn render_todo(todo: &Todo, format: OutputFormat, out: &mut dyn Write) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(todo, out),
        _ => render_todos(std::slice::from_ref(todo), format, out),
    }
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn write_plain(todos: &[Todo], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "ID   Title")?;
    writeln!(out, "-----------")?;
    for todo in todos {
        writeln!(out, "{}   {}", todo.id, todo.title)?;
    }
    Ok(())
}

fn write_table(todos: &[Todo], out: &mut dyn Write) -> io::Result<()> {
    let rows: Vec<[String; 3]> = todos
        .iter()
        .map(|todo| [todo.id.to_string(), todo.title.clone(), todo.uid.to_string()])
        .collect();

    let mut widths = HEADERS.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    write_row(&HEADERS, &widths, out)?;
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    writeln!(out, "{}", separator.join("-+-"))?;
    for row in &rows {
        write_row(row, &widths, out)?;
    }
    Ok(())
}

fn write_row<S: AsRef<str>>(cells: &[S], widths: &[usize], out: &mut dyn Write) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (cell, width))| {
            if index == last {
                // No trailing padding on the final column.
                cell.as_ref().to_string()
            } else {
                pad_str(cell.as_ref(), *width, Alignment::Left, None).into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "{line}")
}
