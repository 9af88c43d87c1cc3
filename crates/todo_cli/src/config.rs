//! Runtime configuration resolved from flags, environment and platform dirs.

use crate::cli::Cli;
use std::path::{Path, PathBuf};
use todo_core::{default_log_level, DbTarget};

const APP_DIR_NAME: &str = "todo";
const DB_FILE_NAME: &str = "todo.sqlite3";
const LOG_DIR_NAME: &str = "logs";
const MEMORY_DB: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_target: DbTarget,
    pub log_level: String,
    /// Always absolute.
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves defaults under the platform local data directory.
    pub fn from_cli(cli: &Cli) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        Self::resolve(cli, dirs::data_local_dir(), &cwd)
    }

    /// Resolution with explicit `data_dir` and `cwd`.
    ///
    /// Without a platform data dir, defaults land in `cwd/.todo`.
    pub fn resolve(cli: &Cli, data_dir: Option<PathBuf>, cwd: &Path) -> Self {
        let app_dir = match data_dir {
            Some(dir) => dir.join(APP_DIR_NAME),
            None => cwd.join(format!(".{APP_DIR_NAME}")),
        };

        let db_target = match &cli.db {
            Some(path) if path.as_os_str() == MEMORY_DB => DbTarget::Memory,
            Some(path) => DbTarget::File(path.clone()),
            None => DbTarget::File(app_dir.join(DB_FILE_NAME)),
        };

        let log_dir = match &cli.log_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => app_dir.join(LOG_DIR_NAME),
        };

        let log_level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_target,
            log_level,
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::cli::{Cli, Command, OutputFormat};
    use std::path::{Path, PathBuf};
    use todo_core::DbTarget;

    // Built directly so `TODO_*` variables in the environment cannot leak in.
    fn cli(db: Option<&str>, log_dir: Option<&str>, log_level: Option<&str>) -> Cli {
        Cli {
            db: db.map(PathBuf::from),
            format: OutputFormat::Table,
            log_level: log_level.map(str::to_string),
            log_dir: log_dir.map(PathBuf::from),
            command: Some(Command::All),
        }
    }

    #[test]
    fn defaults_live_under_data_dir() {
        let config = AppConfig::resolve(
            &cli(None, None, Some("warn")),
            Some(PathBuf::from("/data")),
            Path::new("/work"),
        );

        assert_eq!(
            config.db_target,
            DbTarget::File(PathBuf::from("/data/todo/todo.sqlite3"))
        );
        assert_eq!(config.log_dir, PathBuf::from("/data/todo/logs"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn log_level_defaults_to_build_mode() {
        let config = AppConfig::resolve(&cli(None, None, None), None, Path::new("/work"));
        assert_eq!(config.log_level, todo_core::default_log_level());
    }

    #[test]
    fn explicit_paths_override_defaults() {
        let config = AppConfig::resolve(
            &cli(Some(":memory:"), Some("rel/logs"), None),
            Some(PathBuf::from("/data")),
            Path::new("/work"),
        );

        assert_eq!(config.db_target, DbTarget::Memory);
        assert_eq!(config.log_dir, PathBuf::from("/work/rel/logs"));
    }

    #[test]
    fn missing_data_dir_falls_back_to_cwd() {
        let config = AppConfig::resolve(
            &cli(Some("/tmp/x.sqlite3"), None, None),
            None,
            Path::new("/work"),
        );

        assert_eq!(
            config.db_target,
            DbTarget::File(PathBuf::from("/tmp/x.sqlite3"))
        );
        assert_eq!(config.log_dir, PathBuf::from("/work/.todo/logs"));
    }
}
