//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend behind the `log` facade at most once.
//! - Route output to stderr or to size-rotated files in one directory.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - Re-initialization with a different level or destination is rejected.
//! - Initialization never panics.
//! - Store log lines carry metadata only (store name, record id), never
//!   field contents.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "recordkeep";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    destination: LogDestination,
    _logger: LoggerHandle,
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    /// Absolute directory receiving rotated `recordkeep*.log` files.
    Directory(PathBuf),
}

impl Display for LogDestination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => f.write_str("stderr"),
            Self::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Logging configuration supplied by the embedding process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// `None` logs to stderr.
    pub directory: Option<PathBuf>,
}

impl LogConfig {
    pub fn stderr(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            directory: None,
        }
    }

    pub fn directory(level: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            directory: Some(directory.into()),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::stderr(default_log_level())
    }
}

/// Initializes logging for the whole process.
///
/// # Errors
/// - Unsupported level.
/// - Directory that is blank, relative or cannot be created.
/// - Backend start failure.
/// - A different configuration is already active.
pub fn init_logging(config: &LogConfig) -> Result<(), String> {
    let level = normalize_level(&config.level)?;
    let destination = match &config.directory {
        None => LogDestination::Stderr,
        Some(dir) => LogDestination::Directory(normalize_log_dir(dir)?),
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, destination.clone()))?;
    ensure_same_config(state, level, &destination)
}

/// Returns `(level, destination)` once logging is active.
pub fn logging_status() -> Option<(&'static str, LogDestination)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.destination.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, destination: LogDestination) -> Result<LoggingState, String> {
    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?;

    let logger = match &destination {
        LogDestination::Stderr => logger.log_to_stderr().format(flexi_logger::detailed_format),
        LogDestination::Directory(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
    };

    let handle = logger
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init module=core status=ok level={} destination={} version={}",
        level,
        destination,
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        destination,
        _logger: handle,
    })
}

fn ensure_same_config(
    state: &LoggingState,
    level: &'static str,
    destination: &LogDestination,
) -> Result<(), String> {
    if &state.destination != destination {
        return Err(format!(
            "logging already initialized to `{}`; refusing to switch to `{}`",
            state.destination, destination
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        ));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(dir: &Path) -> Result<PathBuf, String> {
    if dir.as_os_str().is_empty() {
        return Err("log directory cannot be empty".to_string());
    }
    if !dir.is_absolute() {
        return Err(format!(
            "log directory must be an absolute path, got `{}`",
            dir.display()
        ));
    }
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, normalize_level, normalize_log_dir, LogConfig,
        LogDestination,
    };
    use std::path::Path;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level(" WARNING ").unwrap(), "warn");
        assert_eq!(normalize_level("Info").unwrap(), "info");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn normalize_log_dir_rejects_relative_and_empty_paths() {
        let err = normalize_log_dir(Path::new("logs/dev")).unwrap_err();
        assert!(err.contains("absolute"));
        assert!(normalize_log_dir(Path::new("")).is_err());
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = LogConfig::directory("info", dir.path());

        init_logging(&config).expect("first init should succeed");
        init_logging(&config).expect("same config should be idempotent");

        let level_err = init_logging(&LogConfig::directory("debug", dir.path()))
            .expect_err("level conflict should fail");
        assert!(level_err.contains("refusing to switch"));

        let dest_err =
            init_logging(&LogConfig::stderr("info")).expect_err("destination conflict");
        assert!(dest_err.contains("refusing to switch"));

        let (level, destination) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(destination, LogDestination::Directory(dir.path().to_path_buf()));
    }
}
