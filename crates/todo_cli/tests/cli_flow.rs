use support::Session;
use todo_cli::{CliError, Command, OutputFormat, EXIT_FAILURE, EXIT_FATAL};
use todo_core::{DbTarget, TodoServiceError};

mod support {
    use std::path::PathBuf;
    use todo_cli::{run, CliError, Command, OutputFormat};
    use todo_core::DbTarget;

    /// One database file shared by several process-like invocations.
    pub struct Session {
        _dir: tempfile::TempDir,
        pub target: DbTarget,
    }

    impl Session {
        pub fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let path: PathBuf = dir.path().join("todo.sqlite3");
            Self {
                _dir: dir,
                target: DbTarget::File(path),
            }
        }

        pub fn run(&self, command: Command, stdin: &str) -> (Result<(), CliError>, String) {
            self.run_as(command, OutputFormat::Table, stdin)
        }

        pub fn run_as(
            &self,
            command: Command,
            format: OutputFormat,
            stdin: &str,
        ) -> (Result<(), CliError>, String) {
            let mut input = stdin.as_bytes();
            let mut out = Vec::new();
            let result = run(&self.target, &command, format, &mut input, &mut out);
            (result, String::from_utf8(out).unwrap())
        }
    }
}

fn id(value: &str) -> String {
    value.to_string()
}

#[test]
fn add_list_get_update_delete_scenario() {
    let session = Session::new();

    let (result, out) = session.run(Command::Add { title: None }, "Buy milk\n");
    result.unwrap();
    assert_eq!(out, "Enter the title: Todo added successfully! (id 1)\n");

    let (result, out) = session.run(Command::All, "");
    result.unwrap();
    let row = out
        .lines()
        .find(|line| line.contains("Buy milk"))
        .expect("table should contain the new row");
    assert!(row.starts_with("1  | Buy milk"));

    let (result, out) = session.run(Command::GetTodo { id: id("1") }, "");
    result.unwrap();
    assert!(out.lines().next().unwrap().starts_with("ID | Title"));
    assert!(out.contains("Buy milk"));

    let (result, out) = session.run(
        Command::Update {
            id: id("1"),
            title: None,
        },
        "Buy oat milk\n",
    );
    result.unwrap();
    assert_eq!(out, "Enter the new title: Todo 1 was updated\n");

    let (_, out) = session.run(Command::GetTodo { id: id("1") }, "");
    assert!(out.contains("Buy oat milk"));

    let (result, out) = session.run(Command::Delete { id: id("1") }, "");
    result.unwrap();
    assert_eq!(out, "Task with id 1 was deleted\n");

    let (result, out) = session.run(Command::GetTodo { id: id("1") }, "");
    result.unwrap();
    assert_eq!(out, "Todo not found\n");
}

#[test]
fn title_argument_skips_the_prompt() {
    let session = Session::new();

    let (result, out) = session.run(
        Command::Add {
            title: Some("from args".to_string()),
        },
        "",
    );
    result.unwrap();
    assert_eq!(out, "Todo added successfully! (id 1)\n");

    let (result, out) = session.run_as(Command::All, OutputFormat::Plain, "");
    result.unwrap();
    assert_eq!(out, "ID   Title\n-----------\n1   from args\n");
}

#[test]
fn json_format_emits_machine_readable_records() {
    let session = Session::new();

    let (result, out) = session.run_as(
        Command::Add {
            title: Some("json me".to_string()),
        },
        OutputFormat::Json,
        "",
    );
    result.unwrap();
    let created: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(created["title"], "json me");

    let (result, out) = session.run_as(Command::All, OutputFormat::Json, "");
    result.unwrap();
    let listed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["uid"], created["uid"]);
}

#[test]
fn invalid_id_fails_without_prompting() {
    let session = Session::new();

    let (result, out) = session.run(
        Command::Update {
            id: id("abc"),
            title: None,
        },
        "never read\n",
    );
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        CliError::Service(TodoServiceError::InvalidId(ref raw)) if raw == "abc"
    ));
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert!(out.is_empty());
}

#[test]
fn delete_of_missing_todo_reports_not_found() {
    let session = Session::new();

    let (result, out) = session.run(Command::Delete { id: id("7") }, "");
    let err = result.unwrap_err();
    assert!(matches!(err, CliError::Service(TodoServiceError::NotFound(7))));
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert!(out.is_empty());
}

#[test]
fn closed_stdin_on_add_creates_nothing() {
    let session = Session::new();

    let (result, _) = session.run(Command::Add { title: None }, "");
    assert!(matches!(result, Err(CliError::MissingInput("title"))));

    let (_, out) = session.run(Command::All, "");
    assert_eq!(out, "No todos yet\n");
}

#[test]
fn blank_title_is_rejected() {
    let session = Session::new();

    let (result, _) = session.run(Command::Add { title: None }, "   \n");
    assert!(matches!(
        result,
        Err(CliError::Service(TodoServiceError::Validation(_)))
    ));
}

#[test]
fn unopenable_database_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let target = DbTarget::File(dir.path().to_path_buf());

    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    let err = todo_cli::run(&target, &Command::All, OutputFormat::Table, &mut input, &mut out)
        .unwrap_err();

    assert!(matches!(err, CliError::Fatal(_)));
    assert_eq!(err.exit_code(), EXIT_FATAL);
}

#[test]
fn memory_target_starts_empty_each_run() {
    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    todo_cli::run(
        &DbTarget::Memory,
        &Command::Add {
            title: Some("ephemeral".to_string()),
        },
        OutputFormat::Table,
        &mut input,
        &mut out,
    )
    .unwrap();

    let mut out = Vec::new();
    todo_cli::run(&DbTarget::Memory, &Command::All, OutputFormat::Table, &mut input, &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No todos yet\n");
}
