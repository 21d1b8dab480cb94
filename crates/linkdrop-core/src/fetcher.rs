//! One-shot blocking link fetcher.
//!
//! One GET per link, body streamed straight to the destination file. A
//! failed fetch leaves no partial artifact behind and the link is simply
//! retried on a later cycle.

use crate::config::FetchConfig;
use crate::filename::{filename_for_url, with_timestamp_suffix};
use chrono::NaiveDateTime;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Error from a single download attempt (curl failure, HTTP error, or disk
/// write failure). The cycle driver logs these and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (invalid URL, timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the destination file failed (e.g. disk full, permissions).
    #[error("file write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads `url` into `download_dir` and returns the final file path.
///
/// The filename is derived from the URL's last path segment; an existing
/// file of that name gets a timestamp suffix rather than being overwritten.
/// On any error the partial file is removed and the error returned, so the
/// caller can leave the URL unprocessed.
pub fn download_link(
    url: &str,
    download_dir: &Path,
    fetch: &FetchConfig,
) -> Result<PathBuf, FetchError> {
    let now = chrono::Local::now().naive_local();
    let name = filename_for_url(url, now);
    let target = unique_target_path(download_dir, &name, now);

    match fetch_to_file(url, &target, fetch) {
        Ok(()) => Ok(target),
        Err(e) => {
            let _ = fs::remove_file(&target);
            Err(e)
        }
    }
}

/// Picks a path in `dir` for `name` that does not collide with an existing
/// file: first the name itself, then a timestamp suffix, then a numeric
/// suffix on top (two collisions within the same second would otherwise map
/// to the same timestamped name).
fn unique_target_path(dir: &Path, name: &str, now: NaiveDateTime) -> PathBuf {
    let plain = dir.join(name);
    if !plain.exists() {
        return plain;
    }

    let suffixed = with_timestamp_suffix(name, now);
    let mut candidate = dir.join(&suffixed);
    let mut counter = 1u32;
    while candidate.exists() {
        let numbered = match suffixed.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{}_{}.{}", stem, counter, ext),
            _ => format!("{}_{}", suffixed, counter),
        };
        candidate = dir.join(numbered);
        counter += 1;
    }
    candidate
}

/// Performs the blocking GET, writing the body sequentially to `target`.
fn fetch_to_file(url: &str, target: &Path, fetch: &FetchConfig) -> Result<(), FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(fetch.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(fetch.timeout_secs))?;

    let mut file = fs::File::create(target)?;
    let mut write_err: Option<std::io::Error> = None;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()?;
    }

    if let Some(e) = write_err {
        return Err(FetchError::Io(e));
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(())
}
