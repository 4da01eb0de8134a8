//! Registry store for loading and saving the app registry
//!
//! The registry lives in a single JSON file (`apps.json` in the working
//! directory by default). Saves go through a temporary file in the same
//! directory that is renamed over the target, so a failed write never leaves
//! a truncated registry behind.

use crate::config::models::AppRegistry;
use crate::error::{LaunchpadError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// File name of the registry in the working directory
pub const REGISTRY_FILE_NAME: &str = "apps.json";

/// Sole reader and writer of the registry file
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the default registry location
    ///
    /// Returns: `apps.json`, relative to the current working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(REGISTRY_FILE_NAME)
    }

    /// Location of the registry file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry from disk
    ///
    /// A missing file yields an empty registry. A file that exists but cannot
    /// be read or parsed as a JSON object of strings is reported as
    /// `StorageCorrupt` rather than replaced by an empty registry.
    pub fn load(&self) -> Result<AppRegistry> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            // A regular file standing in for a parent directory also means "no registry"
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
                ) =>
            {
                info!(
                    "Registry file {} not found, starting empty",
                    self.path.display()
                );
                return Ok(AppRegistry::default());
            }
            Err(e) => {
                warn!("Failed to read registry {}: {}", self.path.display(), e);
                return Err(self.corrupt(e));
            }
        };

        match serde_json::from_str::<AppRegistry>(&json) {
            Ok(registry) => {
                debug!(
                    "Registry loaded from {} with {} apps",
                    self.path.display(),
                    registry.len()
                );
                Ok(registry)
            }
            Err(e) => {
                warn!("Failed to parse registry {}: {}", self.path.display(), e);
                Err(self.corrupt(e))
            }
        }
    }

    /// Save the full registry to disk with an atomic write
    ///
    /// Creates the parent directory if needed. On failure the previous file,
    /// if any, is left untouched.
    pub fn save(&self, registry: &AppRegistry) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.write_failed(e))?;

        // Atomic write: write to a temp file in the same directory, then rename
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.write_failed(e))?;
        serde_json::to_writer_pretty(&mut temp, registry).map_err(|e| self.write_failed(e))?;
        temp.write_all(b"\n").map_err(|e| self.write_failed(e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| self.write_failed(e))?;
        temp.persist(&self.path)
            .map_err(|e| self.write_failed(e.error))?;

        info!(
            "Registry saved to {} ({} apps)",
            self.path.display(),
            registry.len()
        );
        Ok(())
    }

    fn corrupt(&self, source: impl std::error::Error + Send + Sync + 'static) -> LaunchpadError {
        LaunchpadError::StorageCorrupt {
            path: self.path.clone(),
            source: Box::new(source),
        }
    }

    fn write_failed(
        &self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> LaunchpadError {
        warn!("Failed to save registry {}: {}", self.path.display(), source);
        LaunchpadError::StorageWrite {
            path: self.path.clone(),
            source: Box::new(source),
        }
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
