//! Reapplies a snapshot to the windows that are open right now.

use std::collections::HashSet;

use crate::matching::{MatchStrategy, TitleMatch};
use crate::rect::Rect;
use crate::record::WindowRecord;
use crate::snapshot::SnapshotStore;
use crate::window::{Desktop, Title, WindowHandle};

/// Result of applying a placement to one live window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The apply call failed, usually because the window closed after it
    /// was enumerated.
    Failed(String),
}

/// One live window that matched a snapshot record.
#[derive(Debug, Clone)]
pub struct RestoreEntry {
    pub title: Title,
    pub target: WindowHandle,
    /// Rectangle that was requested as the normal position.
    pub rect: Rect,
    pub outcome: Outcome,
}

/// Summary of one restore pass.
#[derive(Debug, Clone, Default)]
pub struct RestoreReport {
    pub entries: Vec<RestoreEntry>,
    /// Live windows with no snapshot record.
    pub unmatched: usize,
    /// Live windows whose snapshot record was already used by an earlier
    /// window with the same title.
    pub duplicates: usize,
}

impl RestoreReport {
    pub fn applied(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == Outcome::Applied)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.applied()
    }
}

/// Matches live windows against a snapshot and applies placements.
#[derive(Debug, Clone, Default)]
pub struct RestoreEngine<M = TitleMatch> {
    strategy: M,
}

impl RestoreEngine<TitleMatch> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MatchStrategy> RestoreEngine<M> {
    pub fn with_strategy(strategy: M) -> Self {
        Self { strategy }
    }

    /// Restores every live window that has a snapshot record.
    ///
    /// `live` is walked in enumeration order. Each snapshot record is
    /// used at most once, by the first live window that matches it. A
    /// failed apply is recorded and the pass continues.
    pub fn restore<D: Desktop>(
        &self,
        desktop: &D,
        live: &[WindowRecord],
        snapshot: &SnapshotStore,
    ) -> RestoreReport {
        let mut report = RestoreReport::default();
        // Snapshot handles are unique within one snapshot, so they
        // identify which records have been used.
        let mut used: HashSet<WindowHandle> = HashSet::new();

        for window in live {
            let Some(recorded) = self.strategy.find(window, snapshot) else {
                report.unmatched += 1;
                continue;
            };
            if !used.insert(recorded.handle()) {
                crate::log_debug!(
                    "Skipping {} ({}): record already applied",
                    window.title(),
                    window.handle()
                );
                report.duplicates += 1;
                continue;
            }

            let placement = recorded.restore_placement();
            let outcome = match desktop.set_placement(window.handle(), &placement) {
                Ok(()) => Outcome::Applied,
                Err(e) => {
                    crate::log_warn!(
                        "Failed to restore {} ({}): {}",
                        window.title(),
                        window.handle(),
                        e
                    );
                    Outcome::Failed(e.to_string())
                }
            };

            report.entries.push(RestoreEntry {
                title: window.title().clone(),
                target: window.handle(),
                rect: placement.normal_position,
                outcome,
            });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate;
    use crate::placement::ShowState;
    use crate::testing::{FakeDesktop, FakeWindow};

    fn snapshot_of(desktop: &FakeDesktop) -> SnapshotStore {
        let mut store = SnapshotStore::new();
        store.replace(enumerate(desktop).unwrap());
        store
    }

    fn restore(desktop: &FakeDesktop, store: &SnapshotStore) -> RestoreReport {
        let live = enumerate(desktop).unwrap();
        RestoreEngine::new().restore(desktop, &live, store)
    }

    #[test]
    fn restores_resized_window_to_recorded_rect() {
        // Arrange
        let desktop = FakeDesktop::new(vec![FakeWindow::new(
            1,
            "Mail",
            Rect::new(0, 0, 800, 600),
        )]);
        let store = snapshot_of(&desktop);
        desktop.move_window(1, Rect::new(100, 100, 400, 300));

        // Act
        let report = restore(&desktop, &store);

        // Assert
        assert_eq!(report.applied(), 1);
        assert_eq!(desktop.rect_of(1), Some(Rect::new(0, 0, 800, 600)));
    }

    #[test]
    fn round_trip_matches_every_window_once() {
        // Arrange
        let desktop = FakeDesktop::new(vec![
            FakeWindow::new(1, "Mail", Rect::new(0, 0, 800, 600)),
            FakeWindow::new(2, "Editor", Rect::new(800, 0, 1920, 1080)),
            FakeWindow::new(3, "Terminal", Rect::new(0, 600, 800, 1080)),
        ]);
        let store = snapshot_of(&desktop);
        let before: Vec<_> = (1..=3).map(|h| desktop.rect_of(h)).collect();

        // Act
        let report = restore(&desktop, &store);

        // Assert
        assert_eq!(report.applied(), 3);
        assert_eq!(report.unmatched, 0);
        let mut targets: Vec<usize> = report.entries.iter().map(|e| e.target.0).collect();
        targets.sort_unstable();
        assert_eq!(targets, [1, 2, 3]);
        let after: Vec<_> = (1..=3).map(|h| desktop.rect_of(h)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn restoring_twice_gives_same_layout() {
        // Arrange
        let desktop = FakeDesktop::new(vec![
            FakeWindow::new(1, "Mail", Rect::new(0, 0, 800, 600)),
            FakeWindow::new(2, "Editor", Rect::new(800, 0, 1920, 1080)),
        ]);
        let store = snapshot_of(&desktop);
        desktop.move_window(1, Rect::new(10, 10, 50, 50));
        desktop.move_window(2, Rect::new(20, 20, 60, 60));

        // Act
        restore(&desktop, &store);
        let once: Vec<_> = (1..=2).map(|h| desktop.rect_of(h)).collect();
        restore(&desktop, &store);
        let twice: Vec<_> = (1..=2).map(|h| desktop.rect_of(h)).collect();

        // Assert
        assert_eq!(once, twice);
        assert_eq!(once[0], Some(Rect::new(0, 0, 800, 600)));
    }

    #[test]
    fn duplicate_title_restores_first_live_match_only() {
        // Arrange
        let desktop = FakeDesktop::new(vec![
            FakeWindow::new(1, "Notepad", Rect::new(0, 0, 100, 100)),
            FakeWindow::new(2, "Notepad", Rect::new(200, 200, 500, 500)),
        ]);
        let store = snapshot_of(&desktop);
        assert_eq!(store.len(), 1);
        let kept = store.lookup(&Title::from("Notepad")).unwrap().rect();

        // Act
        let report = restore(&desktop, &store);

        // Assert
        assert_eq!(report.applied(), 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.entries[0].target, WindowHandle(1));
        assert_eq!(desktop.rect_of(1), Some(kept));
    }

    #[test]
    fn disjoint_windows_apply_nothing() {
        // Arrange
        let desktop = FakeDesktop::new(vec![FakeWindow::new(1, "A", Rect::new(0, 0, 10, 10))]);
        let store = snapshot_of(&desktop);
        desktop.close(1);
        desktop.open(FakeWindow::new(2, "B", Rect::new(5, 5, 15, 15)));

        // Act
        let report = restore(&desktop, &store);

        // Assert
        assert_eq!(report.applied(), 0);
        assert_eq!(report.failed(), 0);
        assert_eq!(report.unmatched, 1);
        assert!(desktop.applied.borrow().is_empty());
    }

    #[test]
    fn reopened_window_matches_by_title_not_handle() {
        // Arrange
        let desktop = FakeDesktop::new(vec![FakeWindow::new(
            1,
            "Mail",
            Rect::new(0, 0, 800, 600),
        )]);
        let store = snapshot_of(&desktop);
        desktop.close(1);
        desktop.open(FakeWindow::new(42, "Mail", Rect::new(300, 300, 600, 600)));

        // Act
        let report = restore(&desktop, &store);

        // Assert
        assert_eq!(report.applied(), 1);
        assert_eq!(desktop.rect_of(42), Some(Rect::new(0, 0, 800, 600)));
    }

    #[test]
    fn stale_handle_is_isolated() {
        // Arrange
        let desktop = FakeDesktop::new(vec![
            FakeWindow::new(1, "Mail", Rect::new(0, 0, 800, 600)),
            FakeWindow::new(2, "Editor", Rect::new(800, 0, 1600, 600)),
        ]);
        let store = snapshot_of(&desktop);
        let live = enumerate(&desktop).unwrap();
        desktop.close(1);
        desktop.move_window(2, Rect::new(0, 0, 10, 10));

        // Act
        let report = RestoreEngine::new().restore(&desktop, &live, &store);

        // Assert
        assert_eq!(report.failed(), 1);
        assert_eq!(report.applied(), 1);
        assert_eq!(desktop.rect_of(2), Some(Rect::new(800, 0, 1600, 600)));
    }

    #[test]
    fn applied_placement_keeps_recorded_show_state() {
        // Arrange
        let mut window = FakeWindow::new(1, "Browser", Rect::new(-8, -8, 1928, 1088));
        window.placement.show_state = ShowState::Maximized;
        window.placement.flags = 0x2;
        window.placement.normal_position = Rect::new(100, 100, 900, 700);
        let desktop = FakeDesktop::new(vec![window]);
        let store = snapshot_of(&desktop);

        // Act
        restore(&desktop, &store);

        // Assert
        let applied = desktop.applied.borrow();
        let (_, placement) = applied[0];
        assert_eq!(placement.show_state, ShowState::Maximized);
        assert_eq!(placement.flags, 0x2);
        assert_eq!(placement.normal_position, Rect::new(-8, -8, 1928, 1088));
    }

    #[test]
    fn custom_strategy_replaces_title_lookup() {
        // Arrange
        struct Never;
        impl MatchStrategy for Never {
            fn find<'a>(
                &self,
                _live: &WindowRecord,
                _snapshot: &'a SnapshotStore,
            ) -> Option<&'a WindowRecord> {
                None
            }
        }
        let desktop = FakeDesktop::new(vec![FakeWindow::new(1, "Mail", Rect::default())]);
        let store = snapshot_of(&desktop);
        let live = enumerate(&desktop).unwrap();

        // Act
        let report = RestoreEngine::with_strategy(Never).restore(&desktop, &live, &store);

        // Assert
        assert_eq!(report.applied(), 0);
        assert_eq!(report.unmatched, 1);
    }
}
