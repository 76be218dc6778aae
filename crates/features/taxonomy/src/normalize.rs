//! Taxonomy normalization.

use sgrate_domain::{Child, NormalizedEntry, TaxonomyRecord};
use std::collections::HashMap;

/// Collapses taxonomy records into one entry per distinct parent stream.
///
/// First sight of a `parent_of` value creates its entry; every record
/// sharing that value, including the first, appends a [`Child`]. Entry
/// output order is the order parents first appear in the input (map
/// iteration order is never relied on), and each entry's child list
/// preserves the relative order of its input rows.
///
/// Malformed weights never reach this function; the loader rejects them.
#[must_use]
pub fn normalize(records: &[TaxonomyRecord]) -> Vec<NormalizedEntry> {
    let mut entries: Vec<NormalizedEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());

    for record in records {
        let slot = *index.entry(record.parent_of.as_str()).or_insert_with(|| {
            entries.push(NormalizedEntry {
                stream_id: record.parent_of.clone(),
                children: Vec::new(),
            });
            entries.len() - 1
        });
        entries[slot].children.push(Child { id: record.stream_id.clone(), weight: record.weight });
    }

    entries
}
