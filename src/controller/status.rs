//! Status messages reported back to the UI after each action

use crate::error::{LaunchpadError, get_user_friendly_error};
use std::fmt;

/// Severity of a status message, used by the UI to pick a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// The action completed
    Success,
    /// Nothing went wrong, but nothing changed either
    Info,
    /// The action was rejected before touching storage
    Warning,
    /// Storage or launch failure
    Error,
}

/// Short human-readable outcome of a controller action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Severity
    pub level: StatusLevel,
    /// Text shown in the status line
    pub text: String,
}

impl StatusMessage {
    /// Create a success message
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    /// Create an informational message
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    /// Create a warning message
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    /// Create an error message
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }

    /// Hint shown while the registry is empty
    pub fn empty_registry() -> Self {
        Self::info("No apps added yet. Use the sidebar to add some apps!")
    }

    /// Message for a failed action
    ///
    /// Validation failures are warnings, everything else is an error. The
    /// status line is a single line, so only the first paragraph of the
    /// friendly message is kept.
    pub fn from_error(error: &LaunchpadError) -> Self {
        let friendly = get_user_friendly_error(error);
        let text = friendly.split("\n\n").next().unwrap_or_default();
        match error {
            LaunchpadError::Validation(_) => Self::warning(text),
            _ => Self::error(text),
        }
    }

    /// Whether this message reports a failure
    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
