use crate::placement::Placement;
use crate::rect::Rect;
use crate::window::{Title, WindowHandle};

/// One tracked window at a point in time.
///
/// Records are immutable once built. A snapshot replaces its whole set
/// of records rather than editing them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    title: Title,
    handle: WindowHandle,
    placement: Placement,
    rect: Rect,
}

impl WindowRecord {
    pub fn new(title: Title, handle: WindowHandle, placement: Placement, rect: Rect) -> Self {
        Self {
            title,
            handle,
            placement,
            rect,
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// On-screen bounding box at capture time.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The placement to apply when restoring this record: the captured
    /// placement with its normal position replaced by the captured
    /// on-screen rectangle.
    pub fn restore_placement(&self) -> Placement {
        self.placement.with_normal_position(self.rect)
    }
}
