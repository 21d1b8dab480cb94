//! `linkdrop status` – show processed/source/pending counts.

use anyhow::Result;
use linkdrop_core::config::LinkdropConfig;
use linkdrop_core::delta::pending_links;
use linkdrop_core::source::read_source_links;
use linkdrop_core::store::ProcessedStore;

pub fn run_status(cfg: &LinkdropConfig) -> Result<()> {
    let processed = ProcessedStore::at(&cfg.processed_file).load()?;
    let current = read_source_links(&cfg.source_file)?;
    let pending = pending_links(&current, &processed);

    println!("links in source:   {}", current.len());
    println!("already processed: {}", processed.len());
    println!("pending downloads: {}", pending.len());
    Ok(())
}
