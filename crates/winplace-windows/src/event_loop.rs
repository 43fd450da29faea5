use std::sync::mpsc;
use std::thread;

use winplace_core::config::Keybinding;
use winplace_core::{TriggerSender, WindowResult};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, PostThreadMessageW, TranslateMessage, WM_HOTKEY, WM_QUIT,
};

use crate::hotkey::HotkeyManager;

/// Starts the hotkey listener on its own thread.
///
/// The thread registers the keybindings, then runs a message pump that
/// turns `WM_HOTKEY` into triggers. It never touches window state.
/// Returns once registration is done.
pub fn start(sender: TriggerSender, keybindings: Vec<Keybinding>) -> WindowResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = mpsc::channel::<(u32, Vec<Keybinding>)>();

    let handle = thread::spawn(move || {
        // SAFETY: GetCurrentThreadId has no preconditions.
        let thread_id = unsafe { GetCurrentThreadId() };

        let mut hotkeys = HotkeyManager::new(sender);
        hotkeys.register_all(&keybindings);

        let _ = ready_tx.send((thread_id, hotkeys.active_bindings()));

        run_message_pump(&hotkeys);
        // Hotkeys are unregistered when `hotkeys` drops here.
    });

    let (thread_id, bindings) = ready_rx
        .recv()
        .map_err(|_| "hotkey thread exited unexpectedly")?;

    Ok(EventLoopHandle {
        thread_id,
        handle,
        bindings,
    })
}

/// Handle for stopping the hotkey thread.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
    bindings: Vec<Keybinding>,
}

impl EventLoopHandle {
    /// Keybindings that were registered successfully.
    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Posts `WM_QUIT` to the pump and waits for the thread to finish.
    pub fn stop(self) {
        // SAFETY: Posting to a thread id we own; failure means the
        // thread is already gone.
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// Blocks on the thread's message queue until `WM_QUIT`.
fn run_message_pump(hotkeys: &HotkeyManager) {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY {
            hotkeys.dispatch(msg.wParam.0 as i32);
            continue;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
