use windows::Win32::UI::Input::KeyboardAndMouse::{
    VIRTUAL_KEY, VK_BACK, VK_DELETE, VK_DOWN, VK_END, VK_ESCAPE, VK_F1, VK_HOME, VK_INSERT,
    VK_LEFT, VK_NEXT, VK_PAUSE, VK_PRIOR, VK_RETURN, VK_RIGHT, VK_SNAPSHOT, VK_SPACE, VK_TAB,
    VK_UP,
};

/// Named keys and their aliases, matched case-insensitively.
const NAMED_KEYS: &[(&[&str], VIRTUAL_KEY)] = &[
    (&["ENTER", "RETURN"], VK_RETURN),
    (&["ESCAPE", "ESC"], VK_ESCAPE),
    (&["SPACE"], VK_SPACE),
    (&["TAB"], VK_TAB),
    (&["BACKSPACE"], VK_BACK),
    (&["DELETE", "DEL"], VK_DELETE),
    (&["INSERT", "INS"], VK_INSERT),
    (&["HOME"], VK_HOME),
    (&["END"], VK_END),
    (&["PAGEUP", "PGUP"], VK_PRIOR),
    (&["PAGEDOWN", "PGDN"], VK_NEXT),
    (&["LEFT"], VK_LEFT),
    (&["RIGHT"], VK_RIGHT),
    (&["UP"], VK_UP),
    (&["DOWN"], VK_DOWN),
    (&["PAUSE"], VK_PAUSE),
    (&["PRINTSCREEN", "PRTSC"], VK_SNAPSHOT),
];

/// Converts a key name to a Windows virtual key code.
///
/// Accepts a single letter or digit, `F1`-`F24`, or one of the named
/// keys above.
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.trim().to_ascii_uppercase();

    // Letters and digits share their ASCII code with the VK code.
    if let [ch] = upper.as_bytes()
        && ch.is_ascii_alphanumeric()
    {
        return Some(u32::from(*ch));
    }

    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
        && (1..=24).contains(&n)
    {
        return Some(u32::from(VK_F1.0) + n - 1);
    }

    NAMED_KEYS
        .iter()
        .find(|(names, _)| names.contains(&upper.as_str()))
        .map(|(_, vk)| u32::from(vk.0))
}
