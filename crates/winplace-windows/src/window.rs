use std::mem;

use winplace_core::{Placement, Rect, Title, WindowHandle, WindowResult};

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_CLOAKED, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::{
    GetTitleBarInfo, GetWindowPlacement, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    IsWindowVisible, TITLEBARINFO, WINDOWPLACEMENT,
};

use crate::placement;

/// A top-level window on the Windows platform, wrapping a Win32 `HWND`.
///
/// Holds only the handle. Every query goes to the OS, so the answers
/// reflect the window's state at the moment of the call.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl winplace_core::Window for Window {
    fn handle(&self) -> WindowHandle {
        WindowHandle(self.hwnd.0 as usize)
    }

    fn title(&self) -> WindowResult<Title> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW only read the
        // caption into our buffer.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return Ok(Title::default());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            let copied = copied.max(0) as usize;
            Ok(Title::from_utf16(&buffer[..copied]))
        }
    }

    fn is_visible(&self) -> WindowResult<bool> {
        // SAFETY: IsWindowVisible is a simple style query.
        Ok(unsafe { IsWindowVisible(self.hwnd).as_bool() })
    }

    fn is_cloaked(&self) -> WindowResult<bool> {
        let mut cloaked: u32 = 0;
        // SAFETY: DWMWA_CLOAKED writes a single DWORD into `cloaked`,
        // whose size we pass explicitly.
        unsafe {
            DwmGetWindowAttribute(
                self.hwnd,
                DWMWA_CLOAKED,
                &mut cloaked as *mut u32 as *mut _,
                mem::size_of::<u32>() as u32,
            )?;
        }
        Ok(cloaked != 0)
    }

    fn title_bar_state(&self) -> WindowResult<u32> {
        let mut info = TITLEBARINFO {
            cbSize: mem::size_of::<TITLEBARINFO>() as u32,
            ..Default::default()
        };
        // SAFETY: `info` is a properly sized TITLEBARINFO with cbSize set.
        unsafe { GetTitleBarInfo(self.hwnd, &mut info)? };
        // rgstate[0] describes the title bar itself.
        Ok(info.rgstate[0])
    }

    fn placement(&self) -> WindowResult<Placement> {
        let mut raw = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        // SAFETY: `raw` is a properly sized WINDOWPLACEMENT with length set.
        unsafe { GetWindowPlacement(self.hwnd, &mut raw)? };
        Ok(placement::from_win32(&raw))
    }

    fn rect(&self) -> WindowResult<Rect> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect writes the bounding box into `rect`.
        unsafe { GetWindowRect(self.hwnd, &mut rect)? };
        Ok(Rect::new(rect.left, rect.top, rect.right, rect.bottom))
    }
}
