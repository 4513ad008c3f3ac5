//! Elevated launcher for Windows.

use super::Launcher;
use crate::error::{Result, UpdateError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Launches artifacts with an elevation prompt via
/// `Start-Process -Verb RunAs`.
pub struct ElevatedLauncher;

/// Builds the `Start-Process` invocation for `artifact`.
///
/// Single quotes in the path are doubled per PowerShell quoting rules.
fn elevation_script(artifact: &Path, wait: bool) -> String {
    let quoted = artifact.display().to_string().replace('\'', "''");
    let mut script = format!("Start-Process -FilePath '{quoted}' -Verb RunAs");
    if wait {
        script.push_str(" -Wait");
    }
    script
}

impl Launcher for ElevatedLauncher {
    fn launch(&self, artifact: &Path, wait: bool) -> Result<()> {
        let script = elevation_script(artifact, wait);
        let mut command = Command::new("powershell");
        command
            .args(["-NoProfile", "-Command", &script])
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        tracing::info!("launching {} elevated (wait={wait})", artifact.display());

        if wait {
            let status = command
                .status()
                .map_err(|e| UpdateError::Launch(format!("cannot run powershell: {e}")))?;
            if !status.success() {
                return Err(UpdateError::Launch(format!(
                    "elevated launch of {} exited with {status}",
                    artifact.display()
                )));
            }
            Ok(())
        } else {
            command
                .spawn()
                .map_err(|e| UpdateError::Launch(format!("cannot start powershell: {e}")))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_names_the_artifact_and_verb() {
        let script = elevation_script(Path::new(r"C:\Temp\setup.exe"), false);
        assert!(script.contains(r"'C:\Temp\setup.exe'"));
        assert!(script.contains("-Verb RunAs"));
        assert!(!script.contains("-Wait"));
    }

    #[test]
    fn script_appends_wait_flag() {
        let script = elevation_script(Path::new(r"C:\Temp\setup.exe"), true);
        assert!(script.ends_with("-Wait"));
    }

    #[test]
    fn script_escapes_single_quotes() {
        let script = elevation_script(Path::new(r"C:\it's here\setup.exe"), false);
        assert!(script.contains("it''s here"));
    }
}
