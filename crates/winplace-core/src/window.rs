use serde::{Deserialize, Serialize};

use crate::placement::Placement;
use crate::rect::Rect;

/// A boxed error type for window operations.
///
/// Per-window failures during a snapshot or restore never surface as
/// this error; they are recorded in the operation's result instead.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Transient OS identifier for a live window.
///
/// Only valid while that window instance exists. A window that is closed
/// and reopened gets a new handle, so handles are never used to match a
/// snapshot back to live windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowHandle(pub usize);

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Window caption text as raw bytes.
///
/// Titles are compared byte for byte; [`Display`](std::fmt::Display)
/// renders them lossily for console output only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Title(Vec<u8>);

impl Title {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes UTF-16 caption text as WTF-8.
    ///
    /// Well-formed text becomes plain UTF-8. An unpaired surrogate is
    /// kept as its own three-byte sequence instead of U+FFFD, so two
    /// captions differing only there still get different titles.
    pub fn from_utf16(units: &[u16]) -> Self {
        let mut bytes = Vec::with_capacity(units.len());
        for unit in char::decode_utf16(units.iter().copied()) {
            match unit {
                Ok(c) => {
                    let mut buf = [0; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
                Err(e) => {
                    let s = e.unpaired_surrogate();
                    bytes.extend_from_slice(&[
                        0xE0 | (s >> 12) as u8,
                        0x80 | ((s >> 6) & 0x3F) as u8,
                        0x80 | (s & 0x3F) as u8,
                    ]);
                }
            }
        }
        Self(bytes)
    }
}

impl From<&str> for Title {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Title {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Platform-agnostic view of one top-level window.
///
/// Each query talks to the OS and may fail independently; the platform
/// crate (e.g. `winplace-windows`) provides the implementation.
pub trait Window {
    /// Returns the window handle.
    fn handle(&self) -> WindowHandle;

    /// Returns the caption text. An untitled window yields an empty title.
    fn title(&self) -> WindowResult<Title>;

    /// Returns whether the window has the visible style.
    fn is_visible(&self) -> WindowResult<bool>;

    /// Returns whether the compositor is keeping the window off screen
    /// (another virtual desktop, suspended UWP frame, etc.).
    fn is_cloaked(&self) -> WindowResult<bool>;

    /// Returns the accessibility state flags of the title bar.
    fn title_bar_state(&self) -> WindowResult<u32>;

    /// Returns the window's current placement.
    fn placement(&self) -> WindowResult<Placement>;

    /// Returns the window's bounding rectangle in screen coordinates.
    fn rect(&self) -> WindowResult<Rect>;
}

/// Access to the desktop's window manager.
pub trait Desktop {
    type Window: Window;

    /// Returns every top-level window in z-order, topmost first.
    ///
    /// An error here means enumeration could not start at all.
    fn top_level_windows(&self) -> WindowResult<Vec<Self::Window>>;

    /// Applies a placement to the window identified by `handle`.
    ///
    /// Fails if the handle no longer refers to a live window.
    fn set_placement(&self, handle: WindowHandle, placement: &Placement) -> WindowResult<()>;
}
