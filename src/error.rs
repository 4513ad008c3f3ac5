//! Error types for the update workflow.

/// Top-level error type for the self-update client.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// Required configuration field is missing or empty. Raised before any
    /// network or file I/O is attempted.
    #[error("config error: {0}")]
    Config(String),

    /// Transport or HTTP failure (connect error, non-success status).
    #[error("network error: {0}")]
    Network(String),

    /// Local destination file could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The progress callback requested an abort mid-transfer.
    #[error("transfer aborted by progress callback after {bytes_downloaded} bytes")]
    Aborted {
        /// Bytes written to the destination before the abort.
        bytes_downloaded: u64,
    },

    /// Artifact failed to start or, when waited on, exited abnormally.
    #[error("launch error: {0}")]
    Launch(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, UpdateError>;
