//! Registry persistence module
//!
//! This module handles loading and saving the name → path registry.
//! The registry is stored in `apps.json` in the working directory with
//! atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::RegistryStore;
pub use models::{AppEntry, AppRegistry};
