//! Process launch module
//!
//! This module starts registered applications as independent OS processes.
//!
//! # Overview
//!
//! - **Fire-and-forget**: the caller never waits on the child or sees its exit code
//! - **No shell**: the whole launch target is handed to the OS as one program path
//! - **No output capture**: stdin, stdout and stderr are connected to the null device
//! - **Two failure categories**: `LaunchNotFound` when the target does not exist,
//!   `LaunchFailed` for every other OS-level error
//!
//! # Detaching
//!
//! On Unix the child gets its own process group so terminal signals aimed at
//! the launcher do not reach it, and a short-lived reaper thread collects its
//! exit status so it does not linger as a zombie. On Windows the child is
//! created with `DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP`.
//!
//! # Example Usage
//!
//! ```no_run
//! use launchpad::launcher::Launcher;
//!
//! let launcher = Launcher::new();
//! let outcome = launcher.launch("/usr/bin/gnome-calculator")?;
//! println!("Started process {}", outcome.pid);
//! # Ok::<(), launchpad::error::LaunchpadError>(())
//! ```

pub mod process_launcher;

pub use process_launcher::{LaunchOutcome, Launcher};
