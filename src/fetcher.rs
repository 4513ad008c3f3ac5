//! Artifact download: streams an HTTP body to a local file.

use crate::config::UpdateConfig;
use crate::error::{Result, UpdateError};
use crate::progress::ProgressFn;
use crate::transport::Transport;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

const CHUNK_SIZE: usize = 64 * 1024;

/// Downloads the configured artifact into the platform temp directory and
/// returns the resolved destination path.
///
/// The destination is opened before any request is issued; the body is then
/// streamed to it chunk-by-chunk (artifacts are potentially large installers,
/// so nothing is buffered in memory). The progress callback is invoked once
/// per received chunk and once after the final chunk; returning `false`
/// aborts the transfer. On any failure the partially written file is left on
/// disk — the download is not atomic and retry policy belongs to the caller.
///
/// # Errors
///
/// - [`UpdateError::Config`] if a required field is empty (no I/O performed).
/// - [`UpdateError::Io`] if the destination cannot be created or written
///   (no network call is made when the open fails).
/// - [`UpdateError::Network`] on transport/HTTP failure.
/// - [`UpdateError::Aborted`] if the progress callback requested an abort.
pub fn download(
    transport: &Transport,
    config: &UpdateConfig,
    on_progress: Option<&mut ProgressFn<'_>>,
) -> Result<PathBuf> {
    config.ensure_download_fields()?;

    let destination = std::env::temp_dir().join(&config.download_filename);
    tracing::debug!("artifact destination resolved to {}", destination.display());
    let mut file = File::create(&destination)?;

    tracing::info!("downloading artifact from {}", config.download_url);
    let response = transport
        .agent()
        .get(&config.download_url)
        .call()
        .map_err(|e| UpdateError::Network(e.to_string()))?;
    let total_bytes = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok());

    let mut reader = response.into_reader();
    let written = copy_with_progress(&mut reader, &mut file, total_bytes, on_progress)?;
    tracing::info!("downloaded {written} bytes to {}", destination.display());

    Ok(destination)
}

/// Streams `reader` into `writer`, reporting the running byte count.
///
/// Read failures are transport failures (`Network`); write failures are
/// local (`Io`).
fn copy_with_progress(
    reader: &mut dyn Read,
    writer: &mut dyn Write,
    total_bytes: Option<u64>,
    mut on_progress: Option<&mut ProgressFn<'_>>,
) -> Result<u64> {
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut downloaded: u64 = 0;

    loop {
        let n = reader
            .read(&mut chunk)
            .map_err(|e| UpdateError::Network(e.to_string()))?;
        if n == 0 {
            break;
        }
        writer.write_all(&chunk[..n])?;
        downloaded += n as u64;

        if let Some(callback) = on_progress.as_mut()
            && !callback(downloaded, total_bytes)
        {
            return Err(UpdateError::Aborted {
                bytes_downloaded: downloaded,
            });
        }
    }

    // Terminal report: zero-byte bodies otherwise never reach the sink.
    if let Some(callback) = on_progress.as_mut()
        && !callback(downloaded, total_bytes)
    {
        return Err(UpdateError::Aborted {
            bytes_downloaded: downloaded,
        });
    }

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn copies_everything_and_reports_running_totals() {
        let body = vec![7u8; CHUNK_SIZE + 10];
        let mut reader: &[u8] = &body;
        let mut sink = Vec::new();
        let mut reports: Vec<(u64, Option<u64>)> = Vec::new();
        let mut callback = |downloaded, total| {
            reports.push((downloaded, total));
            true
        };

        let written = copy_with_progress(
            &mut reader,
            &mut sink,
            Some(body.len() as u64),
            Some(&mut callback),
        )
        .unwrap();

        assert_eq!(written, body.len() as u64);
        assert_eq!(sink, body);
        // One report per chunk plus the terminal report.
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0], (CHUNK_SIZE as u64, Some(body.len() as u64)));
        assert_eq!(
            *reports.last().unwrap(),
            (body.len() as u64, Some(body.len() as u64))
        );
    }

    #[test]
    fn abort_mid_transfer_stops_early() {
        let body = vec![1u8; 4 * CHUNK_SIZE];
        let mut reader: &[u8] = &body;
        let mut sink = Vec::new();
        let mut callback = |downloaded: u64, _total: Option<u64>| downloaded < CHUNK_SIZE as u64 * 2;

        let err =
            copy_with_progress(&mut reader, &mut sink, None, Some(&mut callback)).unwrap_err();

        match err {
            UpdateError::Aborted { bytes_downloaded } => {
                assert_eq!(bytes_downloaded, 2 * CHUNK_SIZE as u64);
            }
            other => panic!("expected Aborted, got {other:?}"),
        }
        // The partial prefix was written before the abort.
        assert_eq!(sink.len(), 2 * CHUNK_SIZE);
    }

    #[test]
    fn empty_body_still_reports_once() {
        let mut reader: &[u8] = &[];
        let mut sink = Vec::new();
        let mut reports = 0;
        let mut callback = |downloaded: u64, _total: Option<u64>| {
            reports += 1;
            assert_eq!(downloaded, 0);
            true
        };

        let written =
            copy_with_progress(&mut reader, &mut sink, Some(0), Some(&mut callback)).unwrap();
        assert_eq!(written, 0);
        assert_eq!(reports, 1);
    }

    #[test]
    fn works_without_a_callback() {
        let body = b"artifact bytes".to_vec();
        let mut reader: &[u8] = &body;
        let mut sink = Vec::new();

        let written = copy_with_progress(&mut reader, &mut sink, None, None).unwrap();
        assert_eq!(written, body.len() as u64);
        assert_eq!(sink, body);
    }

    #[test]
    fn download_requires_configuration() {
        let transport = Transport::new();
        let config = UpdateConfig::default();
        let err = download(&transport, &config, None).unwrap_err();
        assert!(matches!(err, UpdateError::Config(_)));
    }
}
