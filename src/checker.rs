//! Remote version check.

use crate::config::UpdateConfig;
use crate::error::{Result, UpdateError};
use crate::transport::Transport;
use crate::version::Version;

/// Outcome of comparing the remote version marker against the local version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// The remote version is strictly newer than the local one.
    Newer(Version),
    /// The remote version is equal to or older than the local one.
    NotNewer(Version),
    /// The remote or local token did not parse as `major.minor`.
    Incomparable,
}

impl VersionStatus {
    /// Returns `true` if an update should be offered.
    pub fn update_available(self) -> bool {
        matches!(self, VersionStatus::Newer(_))
    }
}

/// Fetches the remote version marker and compares it to the configured
/// current version.
///
/// The response body is buffered in memory (it is a short text token) and
/// trimmed of surrounding whitespace before parsing. A token that does not
/// parse as `major.minor` on either side yields
/// [`VersionStatus::Incomparable`] rather than an error.
///
/// # Errors
///
/// Returns [`UpdateError::Config`] if a required field is empty (no network
/// call is made), or [`UpdateError::Network`] on transport/HTTP failure.
pub fn check_version(transport: &Transport, config: &UpdateConfig) -> Result<VersionStatus> {
    config.ensure_check_fields()?;

    let response = transport
        .agent()
        .get(&config.version_url)
        .call()
        .map_err(|e| UpdateError::Network(e.to_string()))?;
    let body = response
        .into_string()
        .map_err(|e| UpdateError::Network(e.to_string()))?;

    Ok(compare_tokens(body.trim(), &config.current_version))
}

/// Compares a fetched remote token against the local version string.
fn compare_tokens(remote_token: &str, local_token: &str) -> VersionStatus {
    let remote: Version = match remote_token.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("remote version token {remote_token:?} is unusable: {e}");
            return VersionStatus::Incomparable;
        }
    };

    let local: Version = match local_token.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("local version token {local_token:?} is unusable: {e}");
            return VersionStatus::Incomparable;
        }
    };

    if remote.is_newer_than(local) {
        tracing::info!("update available: {local} -> {remote}");
        VersionStatus::Newer(remote)
    } else {
        VersionStatus::NotNewer(remote)
    }
}
