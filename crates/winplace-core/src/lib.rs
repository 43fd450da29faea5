pub mod app;
pub mod config;
pub mod enumerate;
pub mod filter;
pub mod log;
pub mod matching;
pub mod persist;
pub mod placement;
pub mod rect;
pub mod record;
pub mod restore;
pub mod snapshot;
pub mod trigger;
pub mod window;

#[cfg(test)]
mod testing;

pub use app::{ApplicationState, Flow};
pub use enumerate::enumerate;
pub use filter::{Exclusion, Verdict, classify};
pub use matching::{MatchStrategy, TitleMatch};
pub use persist::SnapshotSink;
pub use placement::{Placement, ShowState};
pub use rect::{Point, Rect};
pub use record::WindowRecord;
pub use restore::{Outcome, RestoreEngine, RestoreReport};
pub use snapshot::SnapshotStore;
pub use trigger::{Trigger, TriggerSender};
pub use window::{Desktop, Title, Window, WindowHandle, WindowResult};
