use crate::record::WindowRecord;
use crate::snapshot::SnapshotStore;

/// Finds the snapshot record that corresponds to a live window.
///
/// The restore engine only ever asks this question, so a stronger
/// identity than the title can be plugged in without touching it.
pub trait MatchStrategy {
    fn find<'a>(
        &self,
        live: &WindowRecord,
        snapshot: &'a SnapshotStore,
    ) -> Option<&'a WindowRecord>;
}

/// Matches windows by exact title equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleMatch;

impl MatchStrategy for TitleMatch {
    fn find<'a>(
        &self,
        live: &WindowRecord,
        snapshot: &'a SnapshotStore,
    ) -> Option<&'a WindowRecord> {
        snapshot.lookup(live.title())
    }
}
