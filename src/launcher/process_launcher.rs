//! Detached process creation

use crate::error::{LaunchpadError, Result};
use std::process::{Child, Command, Stdio};
use tracing::{debug, info, warn};

#[cfg(windows)]
use windows::Win32::System::Threading::{
    CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS, PROCESS_CREATION_FLAGS,
};

/// No inherited console, and Ctrl+C in the launcher's console is not forwarded
#[cfg(windows)]
const LAUNCH_FLAGS: PROCESS_CREATION_FLAGS = PROCESS_CREATION_FLAGS(
    DETACHED_PROCESS.0 | CREATE_NEW_PROCESS_GROUP.0,
);

/// Result of a successful launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// OS process identifier of the started child
    pub pid: u32,
}

/// Starts launch targets as independent processes
#[derive(Debug, Clone, Copy, Default)]
pub struct Launcher;

impl Launcher {
    /// Create a launcher
    pub fn new() -> Self {
        Self
    }

    /// Start `target` without waiting for it to finish
    ///
    /// The string is passed to the OS unchanged as the program to run. An empty
    /// target, or one the OS reports as missing, yields `LaunchNotFound`; any
    /// other spawn failure yields `LaunchFailed`. No retry is attempted.
    pub fn launch(&self, target: &str) -> Result<LaunchOutcome> {
        if target.trim().is_empty() {
            warn!("Refusing to launch an empty target");
            return Err(LaunchpadError::LaunchNotFound(target.to_string()));
        }

        info!("Launching {}", target);

        let child = Self::command(target).spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                warn!("Launch target not found: {}", target);
                LaunchpadError::LaunchNotFound(target.to_string())
            } else {
                warn!("Failed to launch {}: {}", target, e);
                LaunchpadError::LaunchFailed {
                    target: target.to_string(),
                    source: e,
                }
            }
        })?;

        let pid = child.id();
        info!("Launched {} as process {}", target, pid);
        Self::release(child, target);

        Ok(LaunchOutcome { pid })
    }

    /// Build the command for `target` with all standard streams detached
    fn command(target: &str) -> Command {
        let mut cmd = Command::new(target);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(LAUNCH_FLAGS.0);
        }

        cmd
    }

    /// Hand the child off so the caller never blocks on it
    #[cfg(unix)]
    fn release(mut child: Child, target: &str) {
        let target = target.to_string();
        let reaper = std::thread::Builder::new()
            .name("launch-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) => debug!("{} exited with {}", target, status),
                Err(e) => debug!("Lost track of {}: {}", target, e),
            });

        if let Err(e) = reaper {
            // The child keeps running; it is reaped when the launcher exits
            warn!("Failed to spawn reaper thread: {}", e);
        }
    }

    #[cfg(not(unix))]
    fn release(child: Child, target: &str) {
        debug!("Releasing handle for {} (process {})", target, child.id());
        drop(child);
    }
}
