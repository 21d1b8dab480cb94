//! `linkdrop pending` – list the URLs the next cycle would download.

use anyhow::Result;
use linkdrop_core::config::LinkdropConfig;
use linkdrop_core::delta::pending_links;
use linkdrop_core::source::read_source_links;
use linkdrop_core::store::ProcessedStore;

pub fn run_pending(cfg: &LinkdropConfig) -> Result<()> {
    let processed = ProcessedStore::at(&cfg.processed_file).load()?;
    let current = read_source_links(&cfg.source_file)?;
    let pending = pending_links(&current, &processed);

    if pending.is_empty() {
        println!("Nothing pending.");
        return Ok(());
    }
    for url in pending {
        println!("{url}");
    }
    Ok(())
}
