#![cfg(windows)]

/// Ctrl+C handling for the interactive session.
pub mod ctrl_c;

/// `Desktop` implementation over `EnumWindows` / `SetWindowPlacement`.
pub mod desktop;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Hotkey thread and Win32 message pump.
pub mod event_loop;

/// Global hotkey registration.
pub mod hotkey;

/// Key name to virtual key code lookup.
pub mod keys;

/// Conversions between `WINDOWPLACEMENT` and the core placement type.
pub mod placement;

/// Interactive session and one-shot snapshot/restore.
pub mod session;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use desktop::Win32Desktop;
pub use window::Window;
