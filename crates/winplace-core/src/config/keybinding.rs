use serde::{Deserialize, Serialize};

use crate::Trigger;

/// A user-configured keybinding that maps a key combination to a trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybinding {
    /// The trigger to fire.
    pub trigger: Trigger,
    /// Key name (e.g. "S", "F5", "Escape").
    pub key: String,
    /// Modifier keys (e.g. ["ctrl", "alt"]).
    pub modifiers: Vec<Modifier>,
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Win,
}

/// Returns the default keybindings.
///
/// Snapshot: Ctrl + Alt + S
/// Restore: Ctrl + Alt + R
/// Quit: Ctrl + Alt + Q
pub fn defaults() -> Vec<Keybinding> {
    use Modifier::{Alt, Ctrl};

    vec![
        bind(Trigger::Snapshot, "S", &[Ctrl, Alt]),
        bind(Trigger::Restore, "R", &[Ctrl, Alt]),
        bind(Trigger::Quit, "Q", &[Ctrl, Alt]),
    ]
}

fn bind(trigger: Trigger, key: &str, modifiers: &[Modifier]) -> Keybinding {
    Keybinding {
        trigger,
        key: key.into(),
        modifiers: modifiers.to_vec(),
    }
}

impl std::fmt::Display for Keybinding {
    /// Renders as e.g. `Ctrl+Alt+S`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in &self.modifiers {
            let name = match m {
                Modifier::Alt => "Alt",
                Modifier::Shift => "Shift",
                Modifier::Ctrl => "Ctrl",
                Modifier::Win => "Win",
            };
            write!(f, "{name}+")?;
        }
        f.write_str(&self.key)
    }
}
