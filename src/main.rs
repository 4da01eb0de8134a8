//! `Launchpad` - named shortcuts to executables
//!
//! Desktop front-end: a Slint form to add, remove and launch the entries kept
//! in `apps.json` in the working directory.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use launchpad::{config::RegistryStore, controller::AppController, launcher::Launcher, utils};
use tracing::{info, warn};

// Include Slint-generated code
slint::include_modules!();

fn main() -> Result<()> {
    // Start without a log file if it cannot be set up
    if let Err(e) = utils::init_logging() {
        utils::init_stderr_logging();
        warn!("File logging unavailable, logging to stderr: {}", e);
    }

    info!("Launchpad v{} starting...", env!("CARGO_PKG_VERSION"));

    let store = RegistryStore::default();
    info!("Using registry file {}", store.path().display());

    let controller = AppController::new(store, Launcher::new());
    let gui_controller =
        GuiController::new(controller).context("Failed to create GUI controller")?;

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("Launchpad shutting down");

    Ok(())
}
