//! Utility modules
//!
//! Provides logging setup with per-session log rotation.

pub mod logging;

pub use logging::{init_logging, init_stderr_logging, log_dir};
