use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// A DPI-unaware process reads and writes window rectangles in scaled
/// coordinates, so a snapshot taken on a 150% monitor would restore to
/// the wrong size. Must run before any window is queried.
pub fn enable_dpi_awareness() {
    // SAFETY: Called once at startup. Failure (e.g. awareness already
    // set by a manifest) is harmless.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
