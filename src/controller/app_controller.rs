//! Application controller implementation
//!
//! This module implements the request/response controller that the UI calls
//! for every user action.

use crate::config::{AppEntry, RegistryStore};
use crate::controller::status::StatusMessage;
use crate::error::{LaunchpadError, Result};
use crate::launcher::{LaunchOutcome, Launcher};
use tracing::{error, info, warn};

/// Snapshot of everything the UI renders after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Registered apps in registry order
    pub apps: Vec<AppEntry>,
    /// Outcome of the last action, if any
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Entry at `index` in the selector lists, if the index is in range
    pub fn selected(&self, index: i32) -> Option<&AppEntry> {
        usize::try_from(index).ok().and_then(|i| self.apps.get(i))
    }

    /// `index` if it still points at an entry, otherwise the first entry
    pub fn clamp_selection(&self, index: i32) -> i32 {
        if self.selected(index).is_some() {
            index
        } else {
            0
        }
    }
}

/// Application logic controller
#[derive(Debug, Clone)]
pub struct AppController {
    /// Registry persistence
    store: RegistryStore,
    /// Process creation
    launcher: Launcher,
}

impl AppController {
    /// Create a controller over the given store and launcher
    pub fn new(store: RegistryStore, launcher: Launcher) -> Self {
        Self { store, launcher }
    }

    /// Register `name` → `path`, replacing any existing entry with that name.
    ///
    /// Both inputs are trimmed; an empty name or path is rejected with
    /// `Validation` before storage is touched. A storage failure aborts the add.
    pub fn add_app(&self, name: &str, path: &str) -> Result<()> {
        let name = name.trim();
        let path = path.trim();

        if name.is_empty() {
            warn!("Rejected add: app name is empty");
            return Err(LaunchpadError::Validation("app name is empty".to_string()));
        }
        if path.is_empty() {
            warn!("Rejected add of {}: app path is empty", name);
            return Err(LaunchpadError::Validation("app path is empty".to_string()));
        }

        info!("Adding application: {} ({})", name, path);

        let mut registry = self.store.load()?;
        if let Some(previous) = registry.insert(name, path) {
            info!("Replacing previous path {} for {}", previous, name);
        }
        self.store.save(&registry)?;

        info!("Application added successfully");
        Ok(())
    }

    /// Remove `name` from the registry.
    ///
    /// Returns `false` without writing anything if the name is not registered.
    pub fn remove_app(&self, name: &str) -> Result<bool> {
        info!("Removing application: {}", name);

        let mut registry = self.store.load()?;
        if registry.remove(name).is_none() {
            info!("{} is not registered, nothing to remove", name);
            return Ok(false);
        }
        self.store.save(&registry)?;

        info!("Application removed successfully");
        Ok(true)
    }

    /// Launch the app registered under `name`. The registry is never modified.
    pub fn launch_app(&self, name: &str) -> Result<LaunchOutcome> {
        let path = self.resolve(name)?;
        self.launch_path(&path)
    }

    /// Launch a path directly, as the per-entry grid buttons do
    pub fn launch_path(&self, path: &str) -> Result<LaunchOutcome> {
        self.launcher.launch(path)
    }

    /// Registered apps in registry order
    pub fn list_apps(&self) -> Result<Vec<AppEntry>> {
        Ok(self.store.load()?.entries())
    }

    /// Look up the path registered under `name`
    fn resolve(&self, name: &str) -> Result<String> {
        let registry = self.store.load()?;
        registry.get(name).map(str::to_string).ok_or_else(|| {
            warn!("Launch requested for unregistered app {}", name);
            LaunchpadError::UnknownApp(name.to_string())
        })
    }

    /// Add action as reported to the UI
    pub fn handle_add(&self, name: &str, path: &str) -> StatusMessage {
        match self.add_app(name, path) {
            Ok(()) => StatusMessage::success(format!("Added {} to the launcher!", name.trim())),
            Err(e) => Self::failure("add", &e),
        }
    }

    /// Remove action as reported to the UI
    pub fn handle_remove(&self, name: &str) -> StatusMessage {
        match self.remove_app(name) {
            Ok(true) => StatusMessage::success(format!("Removed {name} from the launcher!")),
            Ok(false) => StatusMessage::info(format!("{name} is not in the launcher.")),
            Err(e) => Self::failure("remove", &e),
        }
    }

    /// Launch-by-name action as reported to the UI
    pub fn handle_launch(&self, name: &str) -> StatusMessage {
        match self.resolve(name) {
            Ok(path) => self.handle_launch_path(&path),
            Err(e) => Self::failure("launch", &e),
        }
    }

    /// Launch-by-path action as reported to the UI
    pub fn handle_launch_path(&self, path: &str) -> StatusMessage {
        match self.launch_path(path) {
            Ok(_) => StatusMessage::success(format!("Launched {path} successfully!")),
            Err(e) => Self::failure("launch", &e),
        }
    }

    /// Current registry contents plus the outcome of the last action.
    ///
    /// A registry that cannot be read is shown as an empty list with the read
    /// error as status; an empty registry without a pending status gets the
    /// "no apps yet" hint.
    pub fn snapshot(&self, status: Option<StatusMessage>) -> AppState {
        match self.list_apps() {
            Ok(apps) => {
                let status = match status {
                    None if apps.is_empty() => Some(StatusMessage::empty_registry()),
                    other => other,
                };
                AppState { apps, status }
            }
            Err(e) => {
                error!("Failed to read registry for display: {}", e);
                AppState {
                    apps: Vec::new(),
                    status: Some(StatusMessage::from_error(&e)),
                }
            }
        }
    }

    fn failure(action: &str, error: &LaunchpadError) -> StatusMessage {
        match error {
            LaunchpadError::Validation(_) => warn!("{} rejected: {}", action, error),
            _ => error!("{} failed: {}", action, error),
        }
        StatusMessage::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppRegistry;
    use crate::controller::StatusLevel;
    use crate::test_utils::{create_test_dir, missing_executable, seeded_store, temp_store};

    fn controller_for(store: RegistryStore) -> AppController {
        AppController::new(store, Launcher::new())
    }

    #[test]
    fn test_add_application() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store.clone());

        controller.add_app("Calc", "/usr/bin/calc").unwrap();

        let registry = store.load().unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Calc"), Some("/usr/bin/calc"));
    }

    #[test]
    fn test_add_trims_input() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store.clone());

        controller.add_app("  Calc ", "\t/usr/bin/calc\n").unwrap();

        assert_eq!(
            controller.list_apps().unwrap(),
            vec![AppEntry::new("Calc", "/usr/bin/calc")]
        );
    }

    #[test]
    fn test_add_empty_name_or_path_is_rejected() {
        let (_temp_dir, store) = seeded_store(&[("Editor", "vim")]);
        let controller = controller_for(store.clone());
        let before = std::fs::read_to_string(store.path()).unwrap();

        for (name, path) in [("", "/usr/bin/calc"), ("Calc", ""), ("   ", "/x"), ("", "")] {
            let result = controller.add_app(name, path);
            assert!(matches!(result, Err(LaunchpadError::Validation(_))));

            let message = controller.handle_add(name, path);
            assert_eq!(message.level, StatusLevel::Warning);
        }

        let after = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_add_empty_does_not_create_file() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store.clone());

        let _ = controller.handle_add("", "/usr/bin/calc");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_duplicate_overwrites() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store);

        controller.add_app("X", "/a").unwrap();
        controller.add_app("X", "/b").unwrap();

        assert_eq!(controller.list_apps().unwrap(), vec![AppEntry::new("X", "/b")]);
    }

    #[test]
    fn test_remove_application() {
        let (_temp_dir, store) = seeded_store(&[("Calc", "/usr/bin/calc"), ("Editor", "vim")]);
        let controller = controller_for(store.clone());

        assert!(controller.remove_app("Calc").unwrap());

        let registry = store.load().unwrap();
        assert_eq!(registry.entries(), vec![AppEntry::new("Editor", "vim")]);
    }

    #[test]
    fn test_remove_missing_application_is_noop() {
        let (_temp_dir, store) = seeded_store(&[("Calc", "/usr/bin/calc")]);
        let controller = controller_for(store.clone());
        let before = std::fs::read_to_string(store.path()).unwrap();

        assert!(!controller.remove_app("Nope").unwrap());

        let message = controller.handle_remove("Nope");
        assert_eq!(message.level, StatusLevel::Info);
        assert_eq!(message.text, "Nope is not in the launcher.");

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_remove_from_empty_registry_does_not_create_file() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store.clone());

        assert!(!controller.remove_app("Calc").unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_launch_missing_executable_leaves_registry_alone() {
        let temp_dir = create_test_dir();
        let target = missing_executable(&temp_dir);
        let (_store_dir, store) = seeded_store(&[("Ghost", target.as_str())]);
        let controller = controller_for(store.clone());
        let before = store.load().unwrap();

        let result = controller.launch_app("Ghost");
        assert!(matches!(result, Err(LaunchpadError::LaunchNotFound(_))));

        let message = controller.handle_launch("Ghost");
        assert!(message.is_error());
        assert_eq!(
            message.text,
            format!("Could not find {target}. Make sure the path is correct.")
        );

        assert_eq!(store.load().unwrap().entries(), before.entries());
    }

    #[test]
    fn test_launch_unknown_name() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store);

        assert!(matches!(
            controller.launch_app("Calc"),
            Err(LaunchpadError::UnknownApp(_))
        ));
        assert!(controller.handle_launch("Calc").is_error());
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_registered_program() {
        let (_temp_dir, store) = seeded_store(&[("Shell", "sh")]);
        let controller = controller_for(store.clone());

        let outcome = controller.launch_app("Shell").unwrap();
        assert!(outcome.pid > 0);

        let message = controller.handle_launch("Shell");
        assert_eq!(message, StatusMessage::success("Launched sh successfully!"));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_registry_blocks_mutation() {
        let (_temp_dir, store) = temp_store();
        std::fs::write(store.path(), "not json").unwrap();
        let controller = controller_for(store.clone());

        assert!(matches!(
            controller.add_app("Calc", "/usr/bin/calc"),
            Err(LaunchpadError::StorageCorrupt { .. })
        ));
        assert!(matches!(
            controller.remove_app("Calc"),
            Err(LaunchpadError::StorageCorrupt { .. })
        ));
        assert!(controller.handle_add("Calc", "/usr/bin/calc").is_error());

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "not json");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let temp_dir = create_test_dir();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let controller = controller_for(RegistryStore::new(blocker.join("apps.json")));

        let result = controller.add_app("Calc", "/usr/bin/calc");
        assert!(matches!(result, Err(LaunchpadError::StorageWrite { .. })));

        let message = controller.handle_add("Calc", "/usr/bin/calc");
        assert!(message.is_error());
        assert!(message.text.contains("could not be saved"));
    }

    #[test]
    fn test_snapshot_empty_registry_shows_hint() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store);

        let state = controller.snapshot(None);
        assert!(state.apps.is_empty());
        assert_eq!(state.status, Some(StatusMessage::empty_registry()));
    }

    #[test]
    fn test_snapshot_keeps_action_status() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store);

        let status = controller.handle_add("Calc", "/usr/bin/calc");
        let state = controller.snapshot(Some(status.clone()));

        assert_eq!(state.apps, vec![AppEntry::new("Calc", "/usr/bin/calc")]);
        assert_eq!(state.status, Some(status));
        assert_eq!(
            state.status.map(|s| s.text).as_deref(),
            Some("Added Calc to the launcher!")
        );
    }

    #[test]
    fn test_selection_follows_rendered_list() {
        let (_temp_dir, store) = seeded_store(&[("A", "/a"), ("B", "/b"), ("C", "/c")]);
        let controller = controller_for(store);

        let state = controller.snapshot(None);
        assert_eq!(state.selected(2), Some(&AppEntry::new("C", "/c")));
        assert_eq!(state.selected(-1), None);
        assert_eq!(state.selected(3), None);

        // Removing the selected last entry must not leave a stale selection behind
        let name = state.selected(2).map(|entry| entry.name.clone()).unwrap();
        let status = controller.handle_remove(&name);
        let state = controller.snapshot(Some(status));
        assert_eq!(state.selected(2), None);
        assert_eq!(state.clamp_selection(2), 0);
        assert_eq!(state.selected(0), Some(&AppEntry::new("A", "/a")));
        assert_eq!(state.clamp_selection(1), 1);
        assert_eq!(state.clamp_selection(-1), 0);
    }

    #[test]
    fn test_snapshot_of_corrupt_registry() {
        let (_temp_dir, store) = temp_store();
        std::fs::write(store.path(), "[1, 2, 3]").unwrap();
        let controller = controller_for(store);

        let state = controller.snapshot(None);
        assert!(state.apps.is_empty());
        assert!(state.status.is_some_and(|s| s.is_error()));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let (_temp_dir, store) = temp_store();
        let controller = controller_for(store.clone());

        for (name, path) in [("Zed", "zed"), ("Alpha", "alpha"), ("Mid", "mid")] {
            controller.add_app(name, path).unwrap();
        }
        controller.add_app("Alpha", "alpha2").unwrap();

        let names: Vec<String> = controller
            .list_apps()
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["Zed", "Alpha", "Mid"]);

        let expected: AppRegistry = [("Zed", "zed"), ("Alpha", "alpha2"), ("Mid", "mid")]
            .into_iter()
            .collect();
        assert_eq!(store.load().unwrap().entries(), expected.entries());
    }
}
