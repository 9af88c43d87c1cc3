//! Interactive single-line input.

use crate::error::CliError;
use std::io::{BufRead, Write};

/// Writes `prompt` without a newline, then reads one line from `input`.
///
/// The line is returned as read, line ending included; title normalization
/// happens in the core.
pub fn prompt_line(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    prompt: &str,
    what: &'static str,
) -> Result<String, CliError> {
    write!(output, "{prompt}").map_err(CliError::Output)?;
    output.flush().map_err(CliError::Output)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(CliError::Prompt)?;
    if read == 0 {
        // Keep following output off the prompt line.
        writeln!(output).map_err(CliError::Output)?;
        return Err(CliError::MissingInput(what));
    }
    Ok(line)
}
