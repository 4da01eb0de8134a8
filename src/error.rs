//! Error types for `Launchpad`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains so the log shows
//! the underlying I/O or JSON failure.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `Launchpad`
#[derive(Debug, Error)]
pub enum LaunchpadError {
    /// The registry file exists but is not a JSON object of strings
    #[error("Registry file {path} is unreadable or corrupt: {source}")]
    StorageCorrupt {
        /// Location of the registry file
        path: PathBuf,
        /// Underlying read or parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The registry could not be written back to disk
    #[error("Failed to write registry file {path}: {source}")]
    StorageWrite {
        /// Location of the registry file
        path: PathBuf,
        /// Underlying write failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The launch target does not resolve to anything the OS can start
    #[error("Launch target not found: {0}")]
    LaunchNotFound(String),

    /// Process creation failed for a reason other than a missing target
    #[error("Failed to launch {target}: {source}")]
    LaunchFailed {
        /// The path or command that was passed to the OS
        target: String,
        /// OS-level failure
        #[source]
        source: std::io::Error,
    },

    /// Input rejected before touching storage
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The requested name is not in the registry
    #[error("No app named {0} in the registry")]
    UnknownApp(String),

    /// Logging system setup failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Logging setup failed: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for `Launchpad` operations
pub type Result<T> = std::result::Result<T, LaunchpadError>;

/// Convert an error to a user-friendly message
///
/// Returns multi-line text suitable for an error dialog, with a hint on how
/// to resolve the most common causes. The first paragraph always stands on
/// its own and is what the status line shows.
pub fn get_user_friendly_error(error: &LaunchpadError) -> String {
    match error {
        LaunchpadError::StorageCorrupt { path, source } => {
            format!(
                "The app list could not be read: {source}\n\n\
                 Fix or delete {} to start with an empty list.",
                path.display()
            )
        }
        LaunchpadError::StorageWrite { path, source } => {
            format!(
                "The app list could not be saved: {source}\n\n\
                 Check that you have write permissions and free disk space for:\n\
                 {}",
                path.display()
            )
        }
        LaunchpadError::LaunchNotFound(target) => {
            format!("Could not find {target}. Make sure the path is correct.")
        }
        LaunchpadError::LaunchFailed { target, source } => {
            format!(
                "Could not launch {target}: {source}\n\n\
                 Check that the file is executable and that you have permission to run it."
            )
        }
        LaunchpadError::Validation(_) => "Please enter both app name and path.".to_string(),
        LaunchpadError::UnknownApp(name) => {
            format!("{name} is not in the launcher.\n\nIt may have been removed in the meantime.")
        }
        LaunchpadError::Logging(_) => "Failed to set up logging.\n\n\
             The application will keep working, but no log file is written."
            .to_string(),
    }
}
