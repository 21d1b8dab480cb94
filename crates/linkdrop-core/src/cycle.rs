//! Poll-cycle driver.
//!
//! One cycle is: ensure download dir → load processed store → read source →
//! delta → download each new link in order → persist the store. The store is
//! only rewritten after all downloads of the cycle, so a mid-cycle kill loses
//! that cycle's progress but never un-marks previously processed links.

use crate::config::LinkdropConfig;
use crate::delta::pending_links;
use crate::fetcher::download_link;
use crate::source::read_source_links;
use crate::store::ProcessedStore;
use anyhow::{Context, Result};
use std::fs;
use std::thread;
use std::time::Duration;

/// Counts from one completed cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleReport {
    /// Links currently listed in the source file (after dedup).
    pub found: usize,
    /// Links already in the processed store when the cycle started.
    pub already_processed: usize,
    /// Links that were new this cycle.
    pub pending: usize,
    /// Downloads that succeeded.
    pub downloaded: usize,
    /// Downloads that failed (left unprocessed, retried next cycle).
    pub failed: usize,
}

fn now_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Runs one full cycle. Filesystem errors (download dir, store) abort the
/// cycle; per-link download errors are logged and the link stays pending.
pub fn run_cycle(cfg: &LinkdropConfig) -> Result<CycleReport> {
    fs::create_dir_all(&cfg.download_dir).with_context(|| {
        format!("creating download dir {}", cfg.download_dir.display())
    })?;

    let store = ProcessedStore::at(&cfg.processed_file);
    let mut processed = store.load()?;
    let already_processed = processed.len();
    let current = read_source_links(&cfg.source_file)?;
    let pending = pending_links(&current, &processed);

    println!("{}", "=".repeat(60));
    println!("[{}] starting new cycle", now_stamp());
    println!("links currently in source: {}", current.len());
    println!("links already processed: {}", already_processed);
    println!("new links to download: {}", pending.len());
    tracing::info!(
        found = current.len(),
        processed = already_processed,
        pending = pending.len(),
        "cycle start"
    );

    let fetch = cfg.fetch_config();
    let mut downloaded = 0;
    let mut failed = 0;
    for url in &pending {
        println!("[{}] downloading: {}", now_stamp(), url);
        match download_link(url, &cfg.download_dir, &fetch) {
            Ok(path) => {
                println!("[{}] saved as: {}", now_stamp(), path.display());
                tracing::info!(url = %url, path = %path.display(), "download complete");
                processed.insert(url.clone());
                downloaded += 1;
            }
            Err(e) => {
                println!("[{}] FAILED to download {}: {}", now_stamp(), url, e);
                tracing::warn!(url = %url, error = %e, "download failed, retrying next cycle");
                failed += 1;
            }
        }
    }

    store.save(&processed)?;
    println!("[{}] cycle finished", now_stamp());
    println!("{}", "=".repeat(60));

    Ok(CycleReport {
        found: current.len(),
        already_processed,
        pending: pending.len(),
        downloaded,
        failed,
    })
}

/// Runs cycles forever, sleeping `interval_secs` between them. Never returns
/// except by propagating a cycle-fatal error; stopping the loop is process
/// termination.
pub fn run_forever(cfg: &LinkdropConfig) -> Result<()> {
    loop {
        run_cycle(cfg)?;
        tracing::debug!(secs = cfg.interval_secs, "sleeping until next cycle");
        thread::sleep(Duration::from_secs(cfg.interval_secs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_config(root: &Path) -> LinkdropConfig {
        LinkdropConfig {
            source_file: root.join("links.txt"),
            processed_file: root.join("processed_links.txt"),
            download_dir: root.join("downloads"),
            interval_secs: 900,
            fetch: None,
        }
    }

    #[test]
    fn empty_source_writes_empty_store_and_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());

        let report = run_cycle(&cfg).unwrap();
        assert_eq!(report.found, 0);
        assert_eq!(report.pending, 0);
        assert_eq!(report.downloaded, 0);
        assert!(cfg.download_dir.is_dir());
        assert_eq!(fs::read_to_string(&cfg.processed_file).unwrap(), "");
    }

    #[test]
    fn already_processed_links_are_not_fetched() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = test_config(dir.path());
        fs::write(&cfg.source_file, "https://x/a.jpg\n").unwrap();
        fs::write(&cfg.processed_file, "https://x/a.jpg\n").unwrap();

        let report = run_cycle(&cfg).unwrap();
        assert_eq!(report.found, 1);
        assert_eq!(report.already_processed, 1);
        assert_eq!(report.pending, 0);
        assert_eq!(report.downloaded, 0);
        assert_eq!(report.failed, 0);
        // Store unchanged.
        assert_eq!(
            fs::read_to_string(&cfg.processed_file).unwrap(),
            "https://x/a.jpg\n"
        );
    }
}
