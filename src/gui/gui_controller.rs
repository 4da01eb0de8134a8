//! GUI controller
//!
//! Binds the Slint `MainWindow` callbacks to `AppController` actions and
//! renders the returned `AppState` after every action.

use crate::{AppRow, MainWindow, StatusKind};
use anyhow::{Context, Result};
use launchpad::controller::{AppController, AppState, StatusLevel, StatusMessage};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Last state pushed into the window; selector indexes refer to its `apps`
type Rendered = Rc<RefCell<AppState>>;

/// Owns the main window and the controller it drives
pub struct GuiController {
    window: MainWindow,
}

impl GuiController {
    /// Create the main window, wire its callbacks and render the initial registry
    pub fn new(controller: AppController) -> Result<Self> {
        let window = MainWindow::new().context("Failed to create main window")?;
        let controller = Rc::new(controller);
        let rendered: Rendered = Rc::new(RefCell::new(controller.snapshot(None)));

        apply_state(&window, &rendered.borrow());
        Self::bind_callbacks(&window, &controller, &rendered);

        Ok(Self { window })
    }

    /// Show the window and block until it is closed
    pub fn run(self) -> Result<()> {
        info!("Showing main window");
        self.window.run().context("Slint event loop failed")?;
        Ok(())
    }

    fn bind_callbacks(window: &MainWindow, controller: &Rc<AppController>, rendered: &Rendered) {
        window.on_add_app({
            let weak = window.as_weak();
            let controller = Rc::clone(controller);
            let rendered = Rc::clone(rendered);
            move |name, path| {
                let Some(window) = weak.upgrade() else { return };
                let status = controller.handle_add(&name, &path);
                if status.level == StatusLevel::Success {
                    window.set_new_name(SharedString::new());
                    window.set_new_path(SharedString::new());
                }
                render(&window, &rendered, controller.snapshot(Some(status)));
            }
        });

        window.on_remove_app({
            let weak = window.as_weak();
            let controller = Rc::clone(controller);
            let rendered = Rc::clone(rendered);
            move |index| {
                let Some(window) = weak.upgrade() else { return };
                let Some(name) = selected_name(&rendered, index) else {
                    warn!("Remove requested for stale selection {}", index);
                    return;
                };
                let status = controller.handle_remove(&name);
                render(&window, &rendered, controller.snapshot(Some(status)));
            }
        });

        window.on_launch_app({
            let weak = window.as_weak();
            let controller = Rc::clone(controller);
            let rendered = Rc::clone(rendered);
            move |index| {
                let Some(window) = weak.upgrade() else { return };
                let Some(name) = selected_name(&rendered, index) else {
                    warn!("Launch requested for stale selection {}", index);
                    return;
                };
                let status = controller.handle_launch(&name);
                render(&window, &rendered, controller.snapshot(Some(status)));
            }
        });

        window.on_launch_path({
            let weak = window.as_weak();
            let controller = Rc::clone(controller);
            let rendered = Rc::clone(rendered);
            move |path| {
                let Some(window) = weak.upgrade() else { return };
                let status = controller.handle_launch_path(&path);
                render(&window, &rendered, controller.snapshot(Some(status)));
            }
        });

        window.on_browse_path({
            let weak = window.as_weak();
            move || {
                let Some(window) = weak.upgrade() else { return };
                let picked = rfd::FileDialog::new()
                    .set_title("Select an application")
                    .pick_file();
                if let Some(path) = picked {
                    debug!("Picked {}", path.display());
                    window.set_new_path(path.to_string_lossy().as_ref().into());
                }
            }
        });
    }
}

/// Name shown at `index` in the selectors the user is looking at
fn selected_name(rendered: &Rendered, index: i32) -> Option<String> {
    rendered
        .borrow()
        .selected(index)
        .map(|entry| entry.name.clone())
}

/// Show `state` and remember it for the next selector lookup
fn render(window: &MainWindow, rendered: &Rendered, state: AppState) {
    apply_state(window, &state);
    *rendered.borrow_mut() = state;
}

/// Push an `AppState` into the window properties
fn apply_state(window: &MainWindow, state: &AppState) {
    let rows: Vec<AppRow> = state
        .apps
        .iter()
        .map(|entry| AppRow {
            name: entry.name.as_str().into(),
            path: entry.path.as_str().into(),
        })
        .collect();
    let names: Vec<SharedString> = state
        .apps
        .iter()
        .map(|entry| entry.name.as_str().into())
        .collect();

    window.set_apps(ModelRc::new(VecModel::from(rows)));
    window.set_app_names(ModelRc::new(VecModel::from(names)));

    window.set_launch_index(state.clamp_selection(window.get_launch_index()));
    window.set_remove_index(state.clamp_selection(window.get_remove_index()));

    match &state.status {
        Some(status) => {
            window.set_status_kind(status_kind(status));
            window.set_status_text(status.text.as_str().into());
        }
        None => window.set_status_text(SharedString::new()),
    }
}

fn status_kind(status: &StatusMessage) -> StatusKind {
    match status.level {
        StatusLevel::Success => StatusKind::Success,
        StatusLevel::Info => StatusKind::Info,
        StatusLevel::Warning => StatusKind::Warning,
        StatusLevel::Error => StatusKind::Error,
    }
}
