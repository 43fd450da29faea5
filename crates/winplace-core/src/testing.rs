//! In-memory desktop used by unit tests.

use std::cell::{Cell, RefCell};

use crate::placement::{Placement, ShowState};
use crate::rect::Rect;
use crate::window::{Desktop, Title, Window, WindowHandle, WindowResult};

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    pub handle: usize,
    pub title: Vec<u8>,
    pub visible: bool,
    pub cloaked: bool,
    pub title_bar_state: u32,
    pub placement: Placement,
    pub rect: Rect,
    pub fail_queries: bool,
    pub fail_title: bool,
}

impl FakeWindow {
    /// A visible, uncloaked, normally shown window at `rect`.
    pub fn new(handle: usize, title: &str, rect: Rect) -> Self {
        Self {
            handle,
            title: title.as_bytes().to_vec(),
            visible: true,
            cloaked: false,
            title_bar_state: 0,
            placement: Placement {
                flags: 0,
                show_state: ShowState::Normal,
                normal_position: rect,
                ..Default::default()
            },
            rect,
            fail_queries: false,
            fail_title: false,
        }
    }

    fn check(&self) -> WindowResult<()> {
        if self.fail_queries {
            return Err("access denied".into());
        }
        Ok(())
    }
}

impl Window for FakeWindow {
    fn handle(&self) -> WindowHandle {
        WindowHandle(self.handle)
    }

    fn title(&self) -> WindowResult<Title> {
        if self.fail_title {
            return Err("window destroyed".into());
        }
        self.check()?;
        Ok(Title::new(self.title.clone()))
    }

    fn is_visible(&self) -> WindowResult<bool> {
        self.check()?;
        Ok(self.visible)
    }

    fn is_cloaked(&self) -> WindowResult<bool> {
        self.check()?;
        Ok(self.cloaked)
    }

    fn title_bar_state(&self) -> WindowResult<u32> {
        self.check()?;
        Ok(self.title_bar_state)
    }

    fn placement(&self) -> WindowResult<Placement> {
        self.check()?;
        Ok(self.placement)
    }

    fn rect(&self) -> WindowResult<Rect> {
        self.check()?;
        Ok(self.rect)
    }
}

/// A desktop whose windows live in a `Vec`, in z-order.
///
/// Applying a placement moves the window to the placement's normal
/// position, which is enough to observe restores.
#[derive(Debug, Default)]
pub(crate) struct FakeDesktop {
    pub windows: RefCell<Vec<FakeWindow>>,
    pub applied: RefCell<Vec<(WindowHandle, Placement)>>,
    pub fail_enumeration: Cell<bool>,
}

impl FakeDesktop {
    pub fn new(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows: RefCell::new(windows),
            ..Default::default()
        }
    }

    pub fn rect_of(&self, handle: usize) -> Option<Rect> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.handle == handle)
            .map(|w| w.rect)
    }

    pub fn move_window(&self, handle: usize, rect: Rect) {
        if let Some(w) = self.windows.borrow_mut().iter_mut().find(|w| w.handle == handle) {
            w.rect = rect;
            w.placement.normal_position = rect;
        }
    }

    pub fn close(&self, handle: usize) {
        self.windows.borrow_mut().retain(|w| w.handle != handle);
    }

    pub fn open(&self, window: FakeWindow) {
        self.windows.borrow_mut().insert(0, window);
    }
}

impl Desktop for FakeDesktop {
    type Window = FakeWindow;

    fn top_level_windows(&self) -> WindowResult<Vec<FakeWindow>> {
        if self.fail_enumeration.get() {
            return Err("EnumWindows failed".into());
        }
        Ok(self.windows.borrow().clone())
    }

    fn set_placement(&self, handle: WindowHandle, placement: &Placement) -> WindowResult<()> {
        let mut windows = self.windows.borrow_mut();
        let Some(window) = windows.iter_mut().find(|w| w.handle == handle.0) else {
            return Err(format!("invalid window handle {handle}").into());
        };
        window.placement = *placement;
        window.rect = placement.normal_position;
        self.applied.borrow_mut().push((handle, *placement));
        Ok(())
    }
}
