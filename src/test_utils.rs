#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `Launchpad` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::{AppRegistry, RegistryStore};
use tempfile::TempDir;

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Registry store backed by `apps.json` inside a fresh temporary directory.
///
/// The `TempDir` must be kept alive for as long as the store is used.
pub fn temp_store() -> (TempDir, RegistryStore) {
    let temp_dir = create_test_dir();
    let store = RegistryStore::new(temp_dir.path().join("apps.json"));
    (temp_dir, store)
}

/// Same as [`temp_store`], with `pairs` already saved to disk.
pub fn seeded_store(pairs: &[(&str, &str)]) -> (TempDir, RegistryStore) {
    let (temp_dir, store) = temp_store();
    let registry: AppRegistry = pairs.iter().copied().collect();
    store.save(&registry).unwrap();
    (temp_dir, store)
}

/// Path inside `dir` that is guaranteed not to exist.
pub fn missing_executable(dir: &TempDir) -> String {
    dir.path()
        .join("definitely-not-installed")
        .to_string_lossy()
        .into_owned()
}
