//! Processed-link store: the durable record of URLs already downloaded.
//!
//! Plain text, one URL per line, sorted ascending. Rewritten in full at the
//! end of every cycle; deleting the file forces a re-download of everything.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the processed-store file.
#[derive(Debug, Clone)]
pub struct ProcessedStore {
    path: PathBuf,
}

impl ProcessedStore {
    pub fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the set of already-processed URLs.
    ///
    /// A missing file means "nothing processed yet" (first run). Lines are
    /// trimmed and blanks skipped; the BTreeSet collapses duplicates.
    pub fn load(&self) -> Result<BTreeSet<String>> {
        if !self.path.is_file() {
            return Ok(BTreeSet::new());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading processed store {}", self.path.display()))?;

        Ok(data
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Writes every member, sorted ascending, one per line, overwriting the
    /// file entirely. Plain overwrite, no atomic rename.
    pub fn save(&self, processed: &BTreeSet<String>) -> Result<()> {
        let mut out = String::new();
        for url in processed {
            out.push_str(url);
            out.push('\n');
        }
        fs::write(&self.path, out)
            .with_context(|| format!("writing processed store {}", self.path.display()))
    }
}
