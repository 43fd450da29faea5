//! Decides which top-level windows count as user-facing application
//! windows.
//!
//! A raw walk of the desktop returns hundreds of helper, tool and owner
//! windows. Only windows that have a caption, are visible, are not
//! cloaked by the compositor and whose title bar is not flagged invisible
//! are kept.

use crate::record::WindowRecord;
use crate::window::Window;

/// `STATE_SYSTEM_INVISIBLE` accessibility state bit.
pub const STATE_SYSTEM_INVISIBLE: u32 = 0x0000_8000;

/// Why a window was left out of a snapshot or restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    EmptyTitle,
    Invisible,
    Cloaked,
    SystemInvisible,
    /// One of the OS queries failed. The window is skipped and
    /// enumeration carries on.
    QueryFailed(String),
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("empty title"),
            Self::Invisible => f.write_str("not visible"),
            Self::Cloaked => f.write_str("cloaked"),
            Self::SystemInvisible => f.write_str("title bar invisible"),
            Self::QueryFailed(e) => write!(f, "query failed: {e}"),
        }
    }
}

/// Outcome of classifying one window.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Admitted(WindowRecord),
    Excluded(Exclusion),
}

/// Classifies a window, capturing its state if it is admitted.
///
/// Checks run cheapest first and stop at the first reason to exclude.
/// No query failure is propagated: it becomes
/// [`Exclusion::QueryFailed`].
pub fn classify(window: &impl Window) -> Verdict {
    match try_classify(window) {
        Ok(verdict) => verdict,
        Err(e) => Verdict::Excluded(Exclusion::QueryFailed(e.to_string())),
    }
}

fn try_classify(window: &impl Window) -> crate::WindowResult<Verdict> {
    let title = window.title()?;
    if title.is_empty() {
        return Ok(Verdict::Excluded(Exclusion::EmptyTitle));
    }
    if !window.is_visible()? {
        return Ok(Verdict::Excluded(Exclusion::Invisible));
    }
    if window.is_cloaked()? {
        return Ok(Verdict::Excluded(Exclusion::Cloaked));
    }
    if window.title_bar_state()? & STATE_SYSTEM_INVISIBLE != 0 {
        return Ok(Verdict::Excluded(Exclusion::SystemInvisible));
    }

    let placement = window.placement()?;
    let rect = window.rect()?;

    Ok(Verdict::Admitted(WindowRecord::new(
        title,
        window.handle(),
        placement,
        rect,
    )))
}
