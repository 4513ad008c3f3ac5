//! Shell-open launcher for platforms without an elevation primitive.

use super::Launcher;
use crate::error::{Result, UpdateError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Launches artifacts through the platform's generic opener command.
pub struct ShellOpenLauncher {
    opener: String,
}

impl ShellOpenLauncher {
    /// Launcher using the platform default opener (`open` on macOS,
    /// `xdg-open` elsewhere).
    pub fn new() -> Self {
        Self {
            opener: default_opener().to_owned(),
        }
    }

    /// Launcher using a specific opener program. The opener receives the
    /// artifact path as its only argument.
    pub fn with_opener(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }
}

impl Default for ShellOpenLauncher {
    fn default() -> Self {
        Self::new()
    }
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

impl Launcher for ShellOpenLauncher {
    fn launch(&self, artifact: &Path, wait: bool) -> Result<()> {
        let mut command = Command::new(&self.opener);
        command
            .arg(artifact)
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        tracing::info!(
            "launching {} via {} (wait={wait})",
            artifact.display(),
            self.opener
        );

        if wait {
            let status = command.status().map_err(|e| {
                UpdateError::Launch(format!("cannot run {}: {e}", self.opener))
            })?;
            if !status.success() {
                return Err(UpdateError::Launch(format!(
                    "{} exited with {status}",
                    self.opener
                )));
            }
            Ok(())
        } else {
            command.spawn().map_err(|e| {
                UpdateError::Launch(format!("cannot start {}: {e}", self.opener))
            })?;
            Ok(())
        }
    }
}
