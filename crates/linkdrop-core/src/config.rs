use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Fetch timeout parameters (optional section in config.toml).
///
/// A total timeout is always applied so a hung transfer cannot stall the
/// poll loop forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Seconds allowed for connection establishment.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole transfer.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 3600,
        }
    }
}

/// Global configuration loaded from `~/.config/linkdrop/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkdropConfig {
    /// Text file with one URL per line, replaced by an external uploader.
    pub source_file: PathBuf,
    /// Text file recording every URL already downloaded, sorted, one per line.
    pub processed_file: PathBuf,
    /// Directory that receives the downloaded files.
    pub download_dir: PathBuf,
    /// Seconds to sleep between poll cycles.
    pub interval_secs: u64,
    /// Optional fetch timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl Default for LinkdropConfig {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from("links.txt"),
            processed_file: PathBuf::from("processed_links.txt"),
            download_dir: PathBuf::from("downloads"),
            interval_secs: 900,
            fetch: None,
        }
    }
}

impl LinkdropConfig {
    /// Fetch timeouts, falling back to the built-in defaults.
    pub fn fetch_config(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkdrop")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkdropConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkdropConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LinkdropConfig = toml::from_str(&data)?;
    Ok(cfg)
}
