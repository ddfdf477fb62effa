//! Name filtering for the listing view.

use uuid::Uuid;

use crate::record::Record;

/// A record that passed the filter, with its position in the unfiltered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Index into the sequence that was filtered
    pub index: usize,
    pub record: &'a Record,
}

impl Match<'_> {
    pub fn id(&self) -> Uuid {
        self.record.id
    }
}

/// Keep the records whose name contains `search`, ignoring case.
///
/// An empty search keeps everything. Order is preserved and each hit keeps
/// its backing index so edits and deletes target the right element.
pub fn filter_by_name<'a>(records: &'a [Record], search: &str) -> Vec<Match<'a>> {
    let needle = search.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name().to_lowercase().contains(&needle))
        .map(|(index, record)| Match { index, record })
        .collect()
}
