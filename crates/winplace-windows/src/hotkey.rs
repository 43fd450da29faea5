use winplace_core::config::{Keybinding, Modifier};
use winplace_core::{Trigger, TriggerSender};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT, MOD_WIN, RegisterHotKey,
    UnregisterHotKey,
};

use crate::keys;

/// A registered global hotkey.
struct Hotkey {
    id: i32,
    binding: Keybinding,
}

/// Owns the process's global hotkey registrations.
///
/// Hotkeys belong to the thread that registers them: `WM_HOTKEY`
/// arrives on that thread's message queue, so the manager must live on
/// the message pump thread. Registrations are released on drop.
pub struct HotkeyManager {
    hotkeys: Vec<Hotkey>,
    sender: TriggerSender,
}

impl HotkeyManager {
    pub fn new(sender: TriggerSender) -> Self {
        Self {
            hotkeys: Vec::new(),
            sender,
        }
    }

    /// Registers each binding as a global hotkey.
    ///
    /// Unknown key names and chords already taken by another program
    /// are reported and skipped.
    pub fn register_all(&mut self, bindings: &[Keybinding]) {
        for (i, binding) in bindings.iter().enumerate() {
            let id = (i + 1) as i32;

            let Some(vk) = keys::vk_from_name(&binding.key) else {
                eprintln!("Unknown key name: {:?}", binding.key);
                winplace_core::log_warn!("Unknown key name {:?} for {:?}", binding.key, binding.trigger);
                continue;
            };

            let mut modifiers = MOD_NOREPEAT;
            for m in &binding.modifiers {
                modifiers |= modifier_to_flag(*m);
            }

            self.register(id, modifiers, vk, binding);
        }
    }

    /// Bindings that were registered successfully.
    pub fn active_bindings(&self) -> Vec<Keybinding> {
        self.hotkeys.iter().map(|h| h.binding.clone()).collect()
    }

    /// Fires the trigger bound to a `WM_HOTKEY` id.
    pub fn dispatch(&self, hotkey_id: i32) {
        let Some(hotkey) = self.hotkeys.iter().find(|h| h.id == hotkey_id) else {
            return;
        };
        let trigger = hotkey.binding.trigger;
        if !self.sender.fire(trigger) && trigger != Trigger::Quit {
            println!("Busy, ignoring {trigger:?}");
        }
    }

    fn register(&mut self, id: i32, modifiers: HOT_KEY_MODIFIERS, vk: u32, binding: &Keybinding) {
        // SAFETY: RegisterHotKey registers a system-wide hotkey on the
        // current thread's message queue under a unique id.
        let result = unsafe { RegisterHotKey(None, id, modifiers, vk) };

        if let Err(e) = result {
            eprintln!("Failed to register {binding} for {:?}: {e}", binding.trigger);
            winplace_core::log_warn!("Failed to register {} (vk=0x{:02X}): {}", binding, vk, e);
            return;
        }

        self.hotkeys.push(Hotkey {
            id,
            binding: binding.clone(),
        });
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for hotkey in &self.hotkeys {
            // SAFETY: Removes a registration this manager created.
            unsafe {
                let _ = UnregisterHotKey(None, hotkey.id);
            }
        }
    }
}

fn modifier_to_flag(modifier: Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Win => MOD_WIN,
    }
}
