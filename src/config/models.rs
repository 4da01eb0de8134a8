//! Registry data models
//!
//! This module defines the data structures persisted in the registry file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single registered application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    /// Display name, unique within the registry
    pub name: String,
    /// Executable path or command string passed to the OS as-is
    pub path: String,
}

impl AppEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Name → path mapping of registered applications
///
/// Serialized as a flat JSON object of strings. Entries keep the order in
/// which they were first added; replacing a path keeps the entry's position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppRegistry {
    apps: IndexMap<String, String>,
}

impl AppRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the previous path if the name existed
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) -> Option<String> {
        self.apps.insert(name.into(), path.into())
    }

    /// Remove an entry, returning its path if it was present
    ///
    /// The relative order of the remaining entries is preserved.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.apps.shift_remove(name)
    }

    /// Look up the path registered under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.apps.get(name).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Iterate over `(name, path)` pairs in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.apps.iter().map(|(name, path)| (name.as_str(), path.as_str()))
    }

    /// Owned entries in registry order
    pub fn entries(&self) -> Vec<AppEntry> {
        self.iter()
            .map(|(name, path)| AppEntry::new(name, path))
            .collect()
    }
}

impl<N: Into<String>, P: Into<String>> FromIterator<(N, P)> for AppRegistry {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        Self {
            apps: iter
                .into_iter()
                .map(|(name, path)| (name.into(), path.into()))
                .collect(),
        }
    }
}
