//! Owned state of a running session and the worker loop that drives it.

use std::sync::mpsc::Receiver;

use crate::enumerate::enumerate;
use crate::matching::{MatchStrategy, TitleMatch};
use crate::persist::SnapshotSink;
use crate::restore::{Outcome, RestoreEngine, RestoreReport};
use crate::snapshot::SnapshotStore;
use crate::trigger::Trigger;
use crate::window::{Desktop, WindowResult};

/// Whether the worker loop should keep going after a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the worker mutates, owned in one place.
///
/// Only the worker thread touches this, so snapshots and restores never
/// interleave.
pub struct ApplicationState<M = TitleMatch> {
    store: SnapshotStore,
    sink: Option<SnapshotSink>,
    sink_error: Option<String>,
    engine: RestoreEngine<M>,
}

impl ApplicationState<TitleMatch> {
    pub fn new(sink: Option<SnapshotSink>) -> Self {
        Self::with_engine(sink, RestoreEngine::new())
    }
}

impl<M: MatchStrategy> ApplicationState<M> {
    pub fn with_engine(sink: Option<SnapshotSink>, engine: RestoreEngine<M>) -> Self {
        Self {
            store: SnapshotStore::new(),
            sink,
            sink_error: None,
            engine,
        }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Why persistence was turned off during this session, if it was.
    pub fn persistence_error(&self) -> Option<&str> {
        self.sink_error.as_deref()
    }

    /// Blocks on `triggers` and handles each one until `Quit` arrives or
    /// every sender is gone.
    pub fn run<D: Desktop>(&mut self, desktop: &D, triggers: Receiver<Trigger>) {
        while let Ok(trigger) = triggers.recv() {
            if self.handle(desktop, trigger) == Flow::Quit {
                break;
            }
        }
        crate::log_info!("Worker loop finished");
    }

    /// Handles one trigger to completion.
    ///
    /// A failure to enumerate windows is reported and the session stays
    /// alive for the next trigger.
    pub fn handle<D: Desktop>(&mut self, desktop: &D, trigger: Trigger) -> Flow {
        let result = match trigger {
            Trigger::Snapshot => self.snapshot(desktop).map(|_| ()),
            Trigger::Restore => self.restore(desktop).map(|_| ()),
            Trigger::Quit => {
                crate::log_info!("Quit requested");
                return Flow::Quit;
            }
        };

        if let Err(e) = result {
            eprintln!("{trigger:?} failed: {e}");
            crate::log_error!("{:?} failed: {}", trigger, e);
        }
        Flow::Continue
    }

    /// Records every admitted window, replacing the previous snapshot.
    ///
    /// Returns the number of windows recorded.
    pub fn snapshot<D: Desktop>(&mut self, desktop: &D) -> WindowResult<usize> {
        let _scope = crate::log::scope(Trigger::Snapshot.as_str());
        let records = enumerate(desktop)?;

        println!("\nSnapshot made:\n");
        for record in &records {
            println!(
                "Window recorded: {}\t{}\t{}",
                record.title(),
                record.rect(),
                record.placement().show_state
            );
        }

        let count = records.len();
        self.store.replace(records);

        if let Some(sink) = self.sink.as_mut()
            && let Err(e) = sink.save(self.store.iter())
        {
            self.disable_sink(&format!("could not save snapshot: {e}"));
        }
        crate::log_info!("Snapshot recorded {} windows ({} unique titles)", count, self.store.len());
        Ok(count)
    }

    /// Moves open windows back to the last snapshot.
    ///
    /// If nothing has been recorded in this session, the persisted
    /// snapshot is loaded first.
    pub fn restore<D: Desktop>(&mut self, desktop: &D) -> WindowResult<RestoreReport> {
        let _scope = crate::log::scope(Trigger::Restore.as_str());
        if self.store.is_empty() {
            self.load_from_sink();
        }

        let live = enumerate(desktop)?;
        println!("\nRestoring snapshot:\n");
        let report = self.engine.restore(desktop, &live, &self.store);

        for entry in &report.entries {
            match &entry.outcome {
                Outcome::Applied => println!("Window moved: {}\t{}", entry.title, entry.rect),
                Outcome::Failed(e) => println!("Window skipped: {}\t{e}", entry.title),
            }
        }
        println!(
            "\n{} restored, {} failed, {} not in snapshot",
            report.applied(),
            report.failed(),
            report.unmatched
        );
        crate::log_info!(
            "Restore applied {} placements ({} failed, {} unmatched, {} duplicates)",
            report.applied(),
            report.failed(),
            report.unmatched,
            report.duplicates
        );

        Ok(report)
    }

    fn load_from_sink(&mut self) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };
        match sink.load() {
            Ok(records) => {
                crate::log_info!("Loaded {} records from the persisted snapshot", records.len());
                self.store.replace(records);
            }
            Err(e) => self.disable_sink(&format!("could not load snapshot: {e}")),
        }
    }

    /// Turns persistence off for the rest of the session.
    ///
    /// The sink is dropped, so this warning is printed at most once.
    fn disable_sink(&mut self, reason: &str) {
        self.sink = None;
        self.sink_error = Some(reason.to_string());
        eprintln!("Warning: persistence disabled, {reason}");
        crate::log_warn!("Persistence disabled: {}", reason);
    }
}
