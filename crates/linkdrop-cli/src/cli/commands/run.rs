//! `linkdrop run` – run the poll loop (or one cycle with `--once`).

use anyhow::Result;
use linkdrop_core::config::LinkdropConfig;
use linkdrop_core::cycle;

pub fn run_poll(cfg: &LinkdropConfig, once: bool) -> Result<()> {
    if once {
        let report = cycle::run_cycle(cfg)?;
        tracing::info!(
            downloaded = report.downloaded,
            failed = report.failed,
            "single cycle finished"
        );
        return Ok(());
    }

    tracing::info!(interval = cfg.interval_secs, "starting poll loop");
    cycle::run_forever(cfg)
}
