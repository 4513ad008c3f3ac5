//! Configuration supplied by the embedding application.

use crate::error::{Result, UpdateError};
use serde::{Deserialize, Serialize};

/// One check/update cycle's configuration.
///
/// Built once by the embedder and passed by shared reference into the
/// checker and fetcher; the client never mutates it and never persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// URL serving the remote version marker (plain-text `major.minor` body).
    pub version_url: String,
    /// Version the embedder is currently running, as a `major.minor` token.
    pub current_version: String,
    /// Local marker filename associated with the fetched version token.
    /// Validated non-empty before a check; never written by the client.
    pub version_filename: String,
    /// URL serving the installer/package artifact.
    pub download_url: String,
    /// Destination filename for the artifact, relative to the platform
    /// temporary directory.
    pub download_filename: String,
}

impl UpdateConfig {
    /// Validates the fields a version check requires.
    pub(crate) fn ensure_check_fields(&self) -> Result<()> {
        if self.version_url.is_empty() {
            return Err(UpdateError::Config("version URL is empty".to_owned()));
        }
        if self.current_version.is_empty() {
            return Err(UpdateError::Config("current version is empty".to_owned()));
        }
        if self.version_filename.is_empty() {
            return Err(UpdateError::Config("version filename is empty".to_owned()));
        }
        Ok(())
    }

    /// Validates the fields a download requires.
    pub(crate) fn ensure_download_fields(&self) -> Result<()> {
        if self.download_url.is_empty() {
            return Err(UpdateError::Config("download URL is empty".to_owned()));
        }
        if self.download_filename.is_empty() {
            return Err(UpdateError::Config("download filename is empty".to_owned()));
        }
        Ok(())
    }
}
