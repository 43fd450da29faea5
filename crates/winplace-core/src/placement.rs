use serde::{Deserialize, Serialize};

use crate::rect::{Point, Rect};

/// How a window is shown when its placement is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl std::fmt::Display for ShowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
        };
        f.write_str(name)
    }
}

/// Layout state the OS keeps for a top-level window.
///
/// Mirrors the fields of a Win32 `WINDOWPLACEMENT`. `normal_position` is
/// the rectangle the window returns to when it leaves the minimized or
/// maximized state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Raw `WPF_*` flags, carried through untouched.
    pub flags: u32,
    pub show_state: ShowState,
    /// Raw `SW_*` command the state was read from, so variants such as
    /// "minimized without activating" survive a restore. Zero when the
    /// placement did not come from the OS; `show_state` decides then.
    #[serde(default)]
    pub show_cmd: u32,
    pub min_position: Point,
    pub max_position: Point,
    pub normal_position: Rect,
}

impl Placement {
    /// Returns a copy with `normal_position` replaced and every other
    /// field unchanged.
    pub fn with_normal_position(&self, rect: Rect) -> Self {
        Self {
            normal_position: rect,
            ..*self
        }
    }
}
