//! Ctrl+C handling via `SetConsoleCtrlHandler`.
//!
//! Ctrl+C or Ctrl+Break in the console fires a `Quit` trigger, so the
//! session shuts down the same way as with the quit hotkey.

use std::sync::OnceLock;

use winplace_core::{Trigger, TriggerSender, WindowResult};
use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};
use windows::core::BOOL;

/// Written once by `set_handler`, read by the callback.
static SENDER: OnceLock<TriggerSender> = OnceLock::new();

/// Routes Ctrl+C to a `Quit` trigger on `sender`.
pub fn set_handler(sender: TriggerSender) -> WindowResult<()> {
    SENDER
        .set(sender)
        .map_err(|_| "Ctrl+C handler already registered")?;

    // SAFETY: `handler` is a plain extern fn that only reads SENDER.
    unsafe { SetConsoleCtrlHandler(Some(handler), true)? };
    Ok(())
}

unsafe extern "system" fn handler(ctrl_type: u32) -> BOOL {
    if ctrl_type != CTRL_C_EVENT && ctrl_type != CTRL_BREAK_EVENT {
        return BOOL(0);
    }
    if let Some(sender) = SENDER.get() {
        // Blocks until the worker finishes its current trigger.
        sender.fire(Trigger::Quit);
    }
    BOOL(1)
}
