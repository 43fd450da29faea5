use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use serde::{Deserialize, Serialize};

/// A discrete request delivered by a hotkey, Ctrl+C or the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Record the layout of every open window.
    Snapshot,
    /// Move open windows back to the last recorded layout.
    Restore,
    /// Stop the session.
    Quit,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Restore => "restore",
            Self::Quit => "quit",
        }
    }
}

/// Creates the channel that carries triggers to the worker.
///
/// The channel has no buffer: a trigger is only handed over while the
/// worker is idle in `recv`.
pub fn channel() -> (TriggerSender, Receiver<Trigger>) {
    let (tx, rx) = mpsc::sync_channel(0);
    (TriggerSender { tx }, rx)
}

/// Sending half of the trigger channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct TriggerSender {
    tx: SyncSender<Trigger>,
}

impl TriggerSender {
    /// Delivers a trigger to the worker.
    ///
    /// `Snapshot` and `Restore` are dropped if the worker is still busy
    /// with an earlier trigger. `Quit` waits until the worker is free so
    /// it is never lost. Returns whether the trigger was delivered.
    pub fn fire(&self, trigger: Trigger) -> bool {
        if trigger == Trigger::Quit {
            return self.tx.send(trigger).is_ok();
        }

        match self.tx.try_send(trigger) {
            Ok(()) => true,
            Err(TrySendError::Full(t)) => {
                crate::log_info!("Ignoring {:?}: previous trigger still running", t);
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn trigger_is_dropped_when_worker_is_busy() {
        // Arrange
        let (tx, _rx) = channel();

        // Act: nobody is receiving, so the worker counts as busy.
        let delivered = tx.fire(Trigger::Snapshot);

        // Assert
        assert!(!delivered);
    }

    #[test]
    fn trigger_reaches_idle_worker() {
        // Arrange
        let (tx, rx) = channel();
        let worker = thread::spawn(move || rx.recv().ok());

        // Act: retry until the worker thread is parked in recv.
        let mut delivered = false;
        for _ in 0..500 {
            if tx.fire(Trigger::Restore) {
                delivered = true;
                break;
            }
            thread::sleep(Duration::from_millis(2));
        }

        // Assert
        assert!(delivered);
        assert_eq!(worker.join().unwrap(), Some(Trigger::Restore));
    }

    #[test]
    fn quit_waits_for_worker() {
        // Arrange
        let (tx, rx) = channel();
        let worker = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            rx.recv().ok()
        });

        // Act
        let delivered = tx.fire(Trigger::Quit);

        // Assert
        assert!(delivered);
        assert_eq!(worker.join().unwrap(), Some(Trigger::Quit));
    }

    #[test]
    fn fire_after_worker_exit_reports_failure() {
        // Arrange
        let (tx, rx) = channel();
        drop(rx);

        // Act / Assert
        assert!(!tx.fire(Trigger::Restore));
        assert!(!tx.fire(Trigger::Quit));
    }

    #[test]
    fn triggers_deserialize_from_lowercase_names() {
        // Act
        let t: Trigger = serde_json::from_str("\"restore\"").unwrap();

        // Assert
        assert_eq!(t, Trigger::Restore);
    }
}
