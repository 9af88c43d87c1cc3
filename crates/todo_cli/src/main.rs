//! `todo` binary entry point.

use console::style;
use log::error;
use std::io;
use std::process::ExitCode;
use todo_cli::{missing_command_usage, parse_cli, run, AppConfig, EXIT_USAGE};
use todo_core::{flush_logging, init_logging};

fn main() -> ExitCode {
    let cli = match parse_cli(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(EXIT_USAGE));
        }
    };

    let Some(command) = cli.command.as_ref() else {
        eprint!("{}", missing_command_usage());
        return ExitCode::from(EXIT_USAGE);
    };

    let config = AppConfig::from_cli(&cli);
    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        eprintln!("{} logging disabled: {err}", style("warning:").for_stderr().yellow());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run(
        &config.db_target,
        command,
        cli.format,
        &mut stdin.lock(),
        &mut stdout.lock(),
    );

    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                "event=command_failed module=cli status=error exit_code={} error={}",
                err.exit_code(),
                err
            );
            eprintln!("{} {err}", style("error:").for_stderr().red().bold());
            ExitCode::from(err.exit_code())
        }
    };
    flush_logging();
    code
}
