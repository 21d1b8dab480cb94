//! Local filename derivation.
//!
//! Derives a filesystem-safe filename from a URL's last path segment, with a
//! timestamp-based fallback when the URL has no usable segment and a
//! timestamp suffix for collision avoidance.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

use chrono::NaiveDateTime;

/// Timestamp format used in fallback names and collision suffixes.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Derives a safe filename for saving a download of `url`.
///
/// Uses the last path segment, sanitized. If the URL has no usable segment
/// (no path, or ends in a separator), synthesizes `download_{timestamp}`.
///
/// # Examples
///
/// - `filename_for_url("https://x/a.jpg", now)` → `"a.jpg"`
/// - `filename_for_url("https://x/", now)` → `"download_20260823_120000"`
pub fn filename_for_url(url: &str, now: NaiveDateTime) -> String {
    let sanitized = filename_from_url_path(url)
        .map(|seg| sanitize_filename(&seg))
        .filter(|s| !s.is_empty());

    match sanitized {
        Some(name) => name,
        None => format!("download_{}", now.format(TIMESTAMP_FORMAT)),
    }
}

/// Inserts a timestamp before the extension, for collision avoidance:
/// `a.jpg` → `a_20260823_120000.jpg`, `archive` → `archive_20260823_120000`.
pub fn with_timestamp_suffix(name: &str, now: NaiveDateTime) -> String {
    let ts = now.format(TIMESTAMP_FORMAT);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}_{}.{}", stem, ts, ext),
        _ => format!("{}_{}", name, ts),
    }
}
