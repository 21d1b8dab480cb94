//! Source-file reader.
//!
//! The source file is owned by an external uploader and replaced wholesale;
//! this side only ever reads a snapshot of it.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Reads the current link list from `path`.
///
/// A missing file means "no links currently", not an error. Lines are
/// trimmed, blank lines dropped, and duplicates within this single read
/// collapsed while preserving first-seen order.
pub fn read_source_links(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading source file {}", path.display()))?;

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for line in data.lines() {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        if seen.insert(url.to_string()) {
            links.push(url.to_string());
        }
    }
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let links = read_source_links(&dir.path().join("links.txt")).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "  https://x/a.jpg  ").unwrap();
        writeln!(f).unwrap();
        writeln!(f, "   ").unwrap();
        writeln!(f, "https://x/b.png").unwrap();
        drop(f);

        let links = read_source_links(&path).unwrap();
        assert_eq!(links, vec!["https://x/a.jpg", "https://x/b.png"]);
    }

    #[test]
    fn dedupes_preserving_first_seen_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");
        fs::write(&path, "https://x/b.png\nhttps://x/a.jpg\nhttps://x/b.png\n").unwrap();

        let links = read_source_links(&path).unwrap();
        assert_eq!(links, vec!["https://x/b.png", "https://x/a.jpg"]);
    }
}
