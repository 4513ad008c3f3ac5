//! Uplift: embeddable self-update client.
//!
//! Checks a remote version marker and, when a newer release exists,
//! downloads the installer artifact and launches it — optionally blocking
//! until the launched process exits.
//!
//! # Architecture
//!
//! The workflow is synchronous and single-flight, composed from small
//! blocking pieces:
//! - **Transport**: one explicitly constructed HTTP agent shared by both
//!   network operations (`ureq`)
//! - **Checker**: fetches the `major.minor` marker and compares it against
//!   the embedder's current version with a strict two-level ordering
//! - **Fetcher**: streams the artifact to the platform temp directory,
//!   reporting progress through an abortable callback
//! - **Launcher**: platform-dependent execution of the downloaded artifact
//!   (elevated on Windows, shell-open fallback elsewhere)
//!
//! The embedder owns all configuration (URLs, filenames, current version)
//! and supplies it per cycle via [`UpdateConfig`]; the crate persists
//! nothing.
//!
//! ```no_run
//! use uplift::{Transport, UpdateConfig, Updater, VersionStatus};
//!
//! # fn main() -> uplift::Result<()> {
//! let transport = Transport::new();
//! let config = UpdateConfig {
//!     version_url: "https://example.com/version".into(),
//!     current_version: "1.4".into(),
//!     version_filename: "version".into(),
//!     download_url: "https://example.com/setup.exe".into(),
//!     download_filename: "setup.exe".into(),
//! };
//!
//! let updater = Updater::new(&transport, &config);
//! if let VersionStatus::Newer(remote) = updater.check()? {
//!     println!("updating to {remote}");
//!     updater.update(None, true)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod launch;
pub mod progress;
pub mod transport;
pub mod updater;
pub mod version;

pub use checker::{VersionStatus, check_version};
pub use config::UpdateConfig;
pub use error::{Result, UpdateError};
pub use fetcher::download;
pub use launch::{Launcher, platform_launcher};
pub use progress::ProgressFn;
pub use transport::Transport;
pub use updater::Updater;
pub use version::{ParseVersionError, Version};
