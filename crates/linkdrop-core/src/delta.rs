//! Delta calculation: the pending work for one cycle.

use std::collections::BTreeSet;

/// Returns the URLs in `source` that are not yet in `processed`, preserving
/// source order. Pure function, no side effects.
pub fn pending_links(source: &[String], processed: &BTreeSet<String>) -> Vec<String> {
    source
        .iter()
        .filter(|url| !processed.contains(*url))
        .cloned()
        .collect()
}
