//! Command-line surface.
//!
//! Parsing never exits the process; callers decide how to report a
//! `clap::Error` (usage problems carry exit code 2, `--help` carries 0) or a
//! missing subcommand (see [`missing_command_usage`]).

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "todo",
    version,
    about = "Manage todos stored in a local SQLite database"
)]
pub struct Cli {
    /// Database file, or `:memory:` for a throwaway database.
    #[arg(long, env = "TODO_DB", global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Output format for listed todos.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// trace|debug|info|warn|error
    #[arg(long, env = "TODO_LOG", global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rotating log files.
    #[arg(long, env = "TODO_LOG_DIR", global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// `None` when invoked without a subcommand.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Get all todos
    All,
    /// Add a new todo (prompts for the title when omitted)
    Add { title: Option<String> },
    /// Get a specific todo by ID
    GetTodo { id: String },
    /// Change the title of a todo (prompts for the title when omitted)
    Update { id: String, title: Option<String> },
    /// Delete a todo by ID
    Delete { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Plain,
    Json,
}

/// Parses process-style arguments (the first item is the binary name).
pub fn parse_cli<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Usage listing printed when no subcommand was given.
pub fn missing_command_usage() -> String {
    format!(
        "Missing command. Use one of the following:\n{}",
        Cli::command().render_help()
    )
}

#[cfg(test)]
mod tests {
    use super::{missing_command_usage, parse_cli, Command, OutputFormat};
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        super::Cli::command().debug_assert();
    }

    #[test]
    fn parses_each_subcommand() {
        let cases = [
            (vec!["todo", "all"], Command::All),
            (vec!["todo", "add"], Command::Add { title: None }),
            (
                vec!["todo", "add", "Buy milk"],
                Command::Add {
                    title: Some("Buy milk".to_string()),
                },
            ),
            (
                vec!["todo", "get-todo", "5"],
                Command::GetTodo {
                    id: "5".to_string(),
                },
            ),
            (
                vec!["todo", "update", "5"],
                Command::Update {
                    id: "5".to_string(),
                    title: None,
                },
            ),
            (
                vec!["todo", "delete", "abc"],
                Command::Delete {
                    id: "abc".to_string(),
                },
            ),
        ];

        for (args, expected) in cases {
            let cli = parse_cli(args).unwrap();
            assert_eq!(cli.command, Some(expected));
        }
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = parse_cli(["todo", "all", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn usage_errors_map_to_exit_code_two() {
        for args in [
            vec!["todo", "frobnicate"],
            vec!["todo", "get-todo"],
            vec!["todo", "delete"],
            vec!["todo", "update"],
        ] {
            let err = parse_cli(args.clone()).unwrap_err();
            assert_eq!(err.exit_code(), 2, "args: {args:?}");
        }
    }

    #[test]
    fn bare_invocation_parses_and_lists_commands() {
        let cli = parse_cli(["todo"]).unwrap();
        assert_eq!(cli.command, None);

        let usage = missing_command_usage();
        assert!(usage.starts_with("Missing command. Use one of the following:"));
        for name in ["all", "add", "get-todo", "update", "delete"] {
            assert!(usage.contains(name), "usage lists {name}");
        }
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = parse_cli(["todo", "--help"]).unwrap_err();
        assert_eq!(err.exit_code(), 0);
    }
}
