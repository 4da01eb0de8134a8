//! `Launchpad` - named shortcuts to executables
//!
//! Keeps a small registry of name → path entries in `apps.json` and starts the
//! selected entry as a detached process. `RegistryStore` owns the file,
//! `Launcher` creates processes, and `AppController` wires both to whatever UI
//! drives it through discrete request/response calls.

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod launcher;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{LaunchpadError, Result};
