use winplace_core::{Desktop, Placement, WindowHandle, WindowResult};

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, SetWindowPlacement};
use windows::core::BOOL;

use crate::placement;
use crate::window::Window;

/// The interactive Windows desktop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

impl Desktop for Win32Desktop {
    type Window = Window;

    /// Collects every top-level window handle via `EnumWindows`.
    ///
    /// `EnumWindows` reports windows in z-order, topmost first. No
    /// filtering happens here; that is the core filter's job.
    fn top_level_windows(&self) -> WindowResult<Vec<Window>> {
        let mut windows: Vec<Window> = Vec::new();

        // SAFETY: EnumWindows calls our callback synchronously for each
        // top-level window. The Vec pointer passed as LPARAM outlives
        // the call.
        unsafe {
            EnumWindows(
                Some(enum_window_callback),
                LPARAM(&mut windows as *mut _ as isize),
            )?;
        }

        Ok(windows)
    }

    fn set_placement(&self, handle: WindowHandle, placement: &Placement) -> WindowResult<()> {
        let raw = placement::to_win32(placement);
        let hwnd = HWND(handle.0 as *mut _);

        // SAFETY: SetWindowPlacement validates the handle itself and
        // fails with ERROR_INVALID_WINDOW_HANDLE if the window is gone.
        unsafe { SetWindowPlacement(hwnd, &raw)? };
        Ok(())
    }
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to keep enumerating.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Vec<Window> pointer from top_level_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };
    windows.push(Window::new(hwnd));
    BOOL(1)
}
