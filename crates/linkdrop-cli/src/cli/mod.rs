//! CLI for the linkdrop polling downloader.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linkdrop_core::config::{self, LinkdropConfig};
use std::path::PathBuf;

use commands::{run_pending, run_poll, run_status};

/// Top-level CLI for the linkdrop polling downloader.
#[derive(Debug, Parser)]
#[command(name = "linkdrop")]
#[command(about = "linkdrop: polls a link file and downloads new URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Path/interval overrides applied on top of config.toml for one invocation.
#[derive(Debug, Args)]
pub struct ConfigOverrides {
    /// Source link file (one URL per line), replaces the configured path.
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Processed-store file, replaces the configured path.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Directory for downloaded files, replaces the configured path.
    #[arg(long, value_name = "PATH")]
    pub download_dir: Option<PathBuf>,

    /// Poll interval in seconds, replaces the configured value.
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

impl ConfigOverrides {
    fn apply(&self, cfg: &mut LinkdropConfig) {
        if let Some(p) = &self.source {
            cfg.source_file = p.clone();
        }
        if let Some(p) = &self.store {
            cfg.processed_file = p.clone();
        }
        if let Some(p) = &self.download_dir {
            cfg.download_dir = p.clone();
        }
        if let Some(secs) = self.interval {
            cfg.interval_secs = secs;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the poll loop: download new links every interval, forever.
    Run {
        /// Run a single cycle and exit (for external schedulers like cron).
        #[arg(long)]
        once: bool,

        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Show counts: processed links, links in source, pending downloads.
    Status {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// List the URLs the next cycle would download.
    Pending {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { once, overrides } => {
                overrides.apply(&mut cfg);
                run_poll(&cfg, once)?;
            }
            CliCommand::Status { overrides } => {
                overrides.apply(&mut cfg);
                run_status(&cfg)?;
            }
            CliCommand::Pending { overrides } => {
                overrides.apply(&mut cfg);
                run_pending(&cfg)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
