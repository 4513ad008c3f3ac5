//! High-level check → download → launch workflow.

use crate::checker::{self, VersionStatus};
use crate::config::UpdateConfig;
use crate::error::Result;
use crate::fetcher;
use crate::launch::{self, Launcher};
use crate::progress::ProgressFn;
use crate::transport::Transport;
use std::path::PathBuf;

/// One-stop entry point for embedders: borrows the shared transport and the
/// embedder's configuration for the duration of a check/update cycle.
///
/// Calls are synchronous and single-flight; an embedder issuing overlapping
/// calls from multiple threads must serialize them itself.
pub struct Updater<'a> {
    transport: &'a Transport,
    config: &'a UpdateConfig,
    launcher: Box<dyn Launcher>,
}

impl<'a> Updater<'a> {
    /// Updater using the platform-appropriate launcher.
    pub fn new(transport: &'a Transport, config: &'a UpdateConfig) -> Self {
        Self::with_launcher(transport, config, launch::platform_launcher())
    }

    /// Updater with an injected launcher, for embedders with their own
    /// execution policy (and for tests).
    pub fn with_launcher(
        transport: &'a Transport,
        config: &'a UpdateConfig,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        Self {
            transport,
            config,
            launcher,
        }
    }

    /// Checks whether the remote version marker announces a newer release.
    ///
    /// # Errors
    ///
    /// See [`checker::check_version`].
    pub fn check(&self) -> Result<VersionStatus> {
        checker::check_version(self.transport, self.config)
    }

    /// Downloads the artifact and launches it, returning the artifact path.
    ///
    /// With `wait` set, blocks until the launched process exits. No launch
    /// is attempted when the download fails or is aborted; the partial file,
    /// if any, is left on disk.
    ///
    /// # Errors
    ///
    /// See [`fetcher::download`] and [`Launcher::launch`].
    pub fn update(&self, on_progress: Option<&mut ProgressFn<'_>>, wait: bool) -> Result<PathBuf> {
        let artifact = fetcher::download(self.transport, self.config, on_progress)?;
        self.launcher.launch(&artifact, wait)?;
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::error::UpdateError;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct RecordingLauncher {
        launches: Arc<AtomicUsize>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, _artifact: &Path, _wait: bool) -> Result<()> {
            self.launches.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn unconfigured_check_is_a_config_error() {
        let transport = Transport::new();
        let config = UpdateConfig::default();
        let updater = Updater::new(&transport, &config);
        assert!(matches!(updater.check(), Err(UpdateError::Config(_))));
    }

    #[test]
    fn failed_download_never_reaches_the_launcher() {
        let transport = Transport::new();
        let config = UpdateConfig::default();
        let launches = Arc::new(AtomicUsize::new(0));
        let updater = Updater::with_launcher(
            &transport,
            &config,
            Box::new(RecordingLauncher {
                launches: Arc::clone(&launches),
            }),
        );

        assert!(matches!(
            updater.update(None, false),
            Err(UpdateError::Config(_))
        ));
        assert_eq!(launches.load(Ordering::SeqCst), 0);
    }
}
