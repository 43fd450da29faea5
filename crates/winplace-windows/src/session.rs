//! Entry points used by the CLI.

use winplace_core::config::{self, Config, Keybinding};
use winplace_core::{ApplicationState, RestoreReport, SnapshotSink, Trigger, WindowResult, trigger};

use crate::desktop::Win32Desktop;
use crate::{ctrl_c, dpi, event_loop};

/// Runs an interactive session until the quit hotkey or Ctrl+C.
///
/// The hotkey thread only produces triggers; this thread does all the
/// window work, one trigger at a time.
pub fn run() -> WindowResult<()> {
    dpi::enable_dpi_awareness();
    let config = config::load();
    winplace_core::log::init(&config.logging);
    winplace_core::log_info!("Session started (PID: {})", std::process::id());

    let keybindings = config::load_keybindings();
    let mut state = ApplicationState::new(open_sink(&config));

    let (tx, rx) = trigger::channel();
    ctrl_c::set_handler(tx.clone())?;
    let event_loop = event_loop::start(tx, keybindings)?;

    print_banner(event_loop.bindings(), state.has_sink());
    state.run(&Win32Desktop, rx);

    event_loop.stop();
    winplace_core::log_info!("Session stopped");
    println!("\nWinplace stopped.");
    Ok(())
}

/// Records the current layout straight to the database.
///
/// Returns the number of windows recorded.
pub fn snapshot_once() -> WindowResult<usize> {
    let mut state = one_shot_state()?;
    let count = state.snapshot(&Win32Desktop)?;
    require_persistence(&state)?;
    Ok(count)
}

/// Restores the layout last written to the database.
pub fn restore_once() -> WindowResult<RestoreReport> {
    let mut state = one_shot_state()?;
    let report = state.restore(&Win32Desktop)?;
    require_persistence(&state)?;
    Ok(report)
}

/// A one-shot command has failed if the database dropped out under it,
/// even though the in-memory work went through.
fn require_persistence(state: &ApplicationState) -> WindowResult<()> {
    match state.persistence_error() {
        Some(reason) => Err(reason.into()),
        None => Ok(()),
    }
}

fn one_shot_state() -> WindowResult<ApplicationState> {
    dpi::enable_dpi_awareness();
    let config = config::load();
    winplace_core::log::init(&config.logging);

    // Without the database a one-shot command has nothing to work with.
    let path = config
        .persistence
        .database_path()
        .ok_or("persistence is disabled in config.toml")?;
    let sink = SnapshotSink::open(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(ApplicationState::new(Some(sink)))
}

/// Opens the snapshot database, or returns `None` with a warning.
///
/// A missing database only costs persistence across restarts, so it
/// never stops the session from starting.
pub fn open_sink(config: &Config) -> Option<SnapshotSink> {
    let path = config.persistence.database_path()?;
    match SnapshotSink::open(&path) {
        Ok(sink) => {
            winplace_core::log_info!("Persisting snapshots to {}", path.display());
            Some(sink)
        }
        Err(e) => {
            eprintln!(
                "Warning: persistence disabled, cannot open {}: {e}",
                path.display()
            );
            winplace_core::log_warn!("Cannot open {}: {}", path.display(), e);
            None
        }
    }
}

fn print_banner(bindings: &[Keybinding], persistent: bool) {
    let d = "\x1b[90m"; // Dim gray: labels
    let w = "\x1b[1;97m"; // Bold bright white: values
    let r = "\x1b[0m"; // Reset

    println!();
    println!("  {w}Winplace{r}");
    println!();
    for (trigger, label) in [
        (Trigger::Snapshot, "record current window positions"),
        (Trigger::Restore, "restore last recorded positions"),
        (Trigger::Quit, "exit"),
    ] {
        let keys: Vec<String> = bindings
            .iter()
            .filter(|b| b.trigger == trigger)
            .map(|b| b.to_string())
            .collect();
        let keys = if keys.is_empty() {
            "(unbound)".to_string()
        } else {
            keys.join(", ")
        };
        println!("  {d}{label:<34}{r}{w}{keys}{r}");
    }
    println!("  {d}{:<34}{r}{w}Ctrl+C{r}", "exit");
    println!();
    let store = if persistent { "on" } else { "off" };
    println!("  {d}Persistence{r}  {store}");
    println!();
}
