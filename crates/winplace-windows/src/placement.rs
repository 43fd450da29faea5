use std::mem;

use winplace_core::{Placement, Point, Rect, ShowState};

use windows::Win32::Foundation::{POINT, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    SW_MINIMIZE, SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, SW_SHOWMINNOACTIVE, SW_SHOWNORMAL,
    WINDOWPLACEMENT, WINDOWPLACEMENT_FLAGS,
};

/// Converts a Win32 placement into the core type.
pub fn from_win32(raw: &WINDOWPLACEMENT) -> Placement {
    Placement {
        flags: raw.flags.0,
        show_state: show_state(raw.showCmd),
        show_cmd: raw.showCmd,
        min_position: Point::new(raw.ptMinPosition.x, raw.ptMinPosition.y),
        max_position: Point::new(raw.ptMaxPosition.x, raw.ptMaxPosition.y),
        normal_position: Rect::new(
            raw.rcNormalPosition.left,
            raw.rcNormalPosition.top,
            raw.rcNormalPosition.right,
            raw.rcNormalPosition.bottom,
        ),
    }
}

/// Converts a core placement into a ready-to-apply `WINDOWPLACEMENT`.
pub fn to_win32(placement: &Placement) -> WINDOWPLACEMENT {
    let r = placement.normal_position;
    WINDOWPLACEMENT {
        length: mem::size_of::<WINDOWPLACEMENT>() as u32,
        flags: WINDOWPLACEMENT_FLAGS(placement.flags),
        showCmd: show_cmd(placement),
        ptMinPosition: POINT {
            x: placement.min_position.x,
            y: placement.min_position.y,
        },
        ptMaxPosition: POINT {
            x: placement.max_position.x,
            y: placement.max_position.y,
        },
        rcNormalPosition: RECT {
            left: r.left,
            top: r.top,
            right: r.right,
            bottom: r.bottom,
        },
    }
}

/// Maps a raw `SW_*` command to a show state.
///
/// `GetWindowPlacement` reports minimized windows with any of the
/// minimize commands; everything that is neither minimized nor
/// maximized is treated as normal.
fn show_state(cmd: u32) -> ShowState {
    let cmd = cmd as i32;
    if cmd == SW_SHOWMAXIMIZED.0 {
        ShowState::Maximized
    } else if cmd == SW_SHOWMINIMIZED.0 || cmd == SW_MINIMIZE.0 || cmd == SW_SHOWMINNOACTIVE.0 {
        ShowState::Minimized
    } else {
        ShowState::Normal
    }
}

/// The recorded `SW_*` command, or one derived from the show state when
/// the placement carries none.
fn show_cmd(placement: &Placement) -> u32 {
    if placement.show_cmd != 0 {
        return placement.show_cmd;
    }
    let cmd = match placement.show_state {
        ShowState::Normal => SW_SHOWNORMAL,
        ShowState::Minimized => SW_SHOWMINIMIZED,
        ShowState::Maximized => SW_SHOWMAXIMIZED,
    };
    cmd.0 as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimize_commands_map_to_minimized() {
        // Assert
        assert_eq!(show_state(2), ShowState::Minimized);
        assert_eq!(show_state(6), ShowState::Minimized);
        assert_eq!(show_state(7), ShowState::Minimized);
    }

    #[test]
    fn other_commands_map_to_normal() {
        // Assert
        assert_eq!(show_state(1), ShowState::Normal);
        assert_eq!(show_state(9), ShowState::Normal);
        assert_eq!(show_state(3), ShowState::Maximized);
    }

    #[test]
    fn conversion_preserves_every_field() {
        // Arrange
        let placement = Placement {
            flags: 0x2,
            show_state: ShowState::Maximized,
            show_cmd: 3,
            min_position: Point::new(-32000, -32000),
            max_position: Point::new(-8, -8),
            normal_position: Rect::new(100, 100, 900, 700),
        };

        // Act
        let raw = to_win32(&placement);

        // Assert
        assert_eq!(raw.length as usize, mem::size_of::<WINDOWPLACEMENT>());
        assert_eq!(from_win32(&raw), placement);
    }

    #[test]
    fn minimized_without_activation_is_applied_unchanged() {
        // Arrange
        let raw = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            showCmd: SW_SHOWMINNOACTIVE.0 as u32,
            ..Default::default()
        };

        // Act
        let placement = from_win32(&raw);

        // Assert
        assert_eq!(placement.show_state, ShowState::Minimized);
        assert_eq!(to_win32(&placement).showCmd, SW_SHOWMINNOACTIVE.0 as u32);
    }

    #[test]
    fn missing_command_falls_back_to_show_state() {
        // Arrange
        let placement = Placement {
            show_state: ShowState::Maximized,
            ..Default::default()
        };

        // Act / Assert
        assert_eq!(to_win32(&placement).showCmd, SW_SHOWMAXIMIZED.0 as u32);
    }
}
