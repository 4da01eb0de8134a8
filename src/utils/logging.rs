//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `launchpad.log` in the
//! per-user data directory and rotation on every start-up, keeping the last
//! nine sessions next to the current one.

use crate::error::{LaunchpadError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (launchpad.log.1 through launchpad.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Base name of the log file
const LOG_FILE_PREFIX: &str = "launchpad";

/// Directory that holds the log files
///
/// The platform data directory (`%APPDATA%`, `~/Library/Application Support`
/// or `$XDG_DATA_HOME`) joined with `launchpad`, or the working directory when
/// the platform reports none.
pub fn log_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join("launchpad"))
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
/// Rotates existing logs on startup to maintain a history of the last 10 sessions.
pub fn init_logging() -> Result<()> {
    init_logging_in(&log_dir())
}

/// Initialize the logging system writing into `log_dir`
pub fn init_logging_in(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir).map_err(|e| LaunchpadError::Logging(Box::new(e)))?;

    let log_path = log_dir.join(format!("{LOG_FILE_PREFIX}.log"));
    rotate_logs_on_startup(&log_path)?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| LaunchpadError::Logging(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true) // Include target module
        .with_file(true) // Include file names
        .with_line_number(true) // Include line numbers
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LaunchpadError::Logging(Box::new(e)))?;

    tracing::info!("Launchpad v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Log to stderr when the file logger could not be set up
///
/// Does nothing if a global subscriber is already installed.
pub fn init_stderr_logging() {
    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// Rotate log files on application startup
///
/// - launchpad.log.9 is deleted (oldest log)
/// - launchpad.log.8 -> launchpad.log.9, ..., launchpad.log.1 -> launchpad.log.2
/// - launchpad.log -> launchpad.log.1
/// - A fresh launchpad.log will be created by the logger
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| LaunchpadError::Logging(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| LaunchpadError::Logging(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log).map_err(rotation_failed)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log).map_err(rotation_failed)?;
        }
    }

    let log_1 = log_dir.join(format!("{log_name}.1"));
    std::fs::rename(log_path, &log_1).map_err(rotation_failed)?;

    Ok(())
}

fn rotation_failed(e: std::io::Error) -> LaunchpadError {
    LaunchpadError::Logging(Box::new(e))
}
