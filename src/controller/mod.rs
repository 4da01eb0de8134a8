//! Application logic controller module
//!
//! This module mediates between UI events, the registry store and the
//! launcher.
//!
//! # Overview
//!
//! The application controller:
//! - **Loads the registry** from disk at the start of every action
//! - **Applies the mutation** (add, remove) in memory and writes the full registry back
//! - **Delegates launches** to the `Launcher` without touching the registry
//! - **Reports a `StatusMessage`** for the UI to display
//!
//! # Request Flow
//!
//! ```text
//! UI event → AppController → RegistryStore::load → mutate → RegistryStore::save
//!                 ↓                                      ↘ Launcher::launch
//!             AppState → UI
//! ```
//!
//! There is no cached state between actions: every call reads the file, so
//! the UI always renders what is on disk. Nothing is retried and no error
//! ends the session; a failed action only produces an error message.

pub mod app_controller;
pub mod status;

pub use app_controller::{AppController, AppState};
pub use status::{StatusLevel, StatusMessage};
