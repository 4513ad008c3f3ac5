//! Platform-dependent artifact launch.
//!
//! Provides a [`Launcher`] trait for executing a downloaded artifact as an
//! external process. On Windows this requests elevation through
//! `Start-Process -Verb RunAs`; on other platforms it falls back to the
//! generic opener command (`open` / `xdg-open`), which has no elevation
//! concept.

use crate::error::Result;
use std::path::Path;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(not(target_os = "windows"))]
mod shell;
// Re-export the shell fallback for tests on all platforms.
#[cfg(test)]
#[cfg(target_os = "windows")]
#[path = "shell.rs"]
mod shell;

#[cfg(not(target_os = "windows"))]
pub use shell::ShellOpenLauncher;
#[cfg(target_os = "windows")]
pub use windows::ElevatedLauncher;

/// Executes a downloaded artifact as an external process.
pub trait Launcher: Send + Sync {
    /// Launches `artifact`. With `wait` set, blocks until the launched
    /// process terminates and treats an abnormal exit as an error; without
    /// it, returns once the process has been started.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::Launch`](crate::UpdateError::Launch) if the
    /// process cannot be started or, when waited on, exits abnormally.
    fn launch(&self, artifact: &Path, wait: bool) -> Result<()>;
}

/// Create the platform-appropriate launcher.
///
/// Returns the elevated launcher on Windows, or the shell-open fallback on
/// all other platforms.
pub fn platform_launcher() -> Box<dyn Launcher> {
    #[cfg(target_os = "windows")]
    {
        Box::new(windows::ElevatedLauncher)
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(shell::ShellOpenLauncher::new())
    }
}
