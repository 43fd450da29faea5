use std::collections::HashMap;

use crate::record::WindowRecord;
use crate::window::Title;

/// The most recent snapshot, keyed by window title.
///
/// Starts empty. Each snapshot replaces the whole map; nothing ever
/// edits individual entries.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    records: HashMap<Title, WindowRecord>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored snapshot with `records`.
    ///
    /// The new map is built completely before it is swapped in. When two
    /// records share a title, the later one wins.
    pub fn replace(&mut self, records: impl IntoIterator<Item = WindowRecord>) {
        let mut next = HashMap::new();
        for record in records {
            next.insert(record.title().clone(), record);
        }
        self.records = next;
    }

    pub fn lookup(&self, title: &Title) -> Option<&WindowRecord> {
        self.records.get(title)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the stored records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.values()
    }
}
