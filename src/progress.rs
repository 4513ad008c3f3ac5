//! Transfer progress reporting.
//!
//! Decouples the download loop from presentation: the embedder supplies a
//! callback and renders progress however it likes (progress bar, GUI
//! signal, log line).

/// Callback invoked during a download with `(bytes_downloaded, bytes_total)`.
///
/// `bytes_total` is the response `Content-Length` when the server supplied
/// one. The callback runs synchronously on the thread performing the
/// transfer, once per received chunk plus once after the final chunk; a
/// callback that blocks stalls the download.
///
/// The return value is a combined signal: `true` continues the transfer,
/// `false` both stops reporting and aborts it (the download then fails with
/// [`UpdateError::Aborted`](crate::UpdateError::Aborted)).
pub type ProgressFn<'a> = dyn FnMut(u64, Option<u64>) -> bool + 'a;
