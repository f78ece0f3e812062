//! The single keyboard event handed to a [`Backend`](crate::Backend).

use win_keycode::Scancode;

/// What an event carries in place of a key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyCode {
    /// Virtual-key code (`wVk`).
    Virtual(Scancode),
    /// One UTF-16 code unit sent in `wScan` with `KEYEVENTF_UNICODE`.
    Unicode(u16),
}

/// Whether the key goes down or comes up.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Key pressed.
    Down,
    /// Key released (`KEYEVENTF_KEYUP`).
    Up,
}

/// A transient "key goes down" or "key goes up" record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InputEvent {
    /// Key or character unit.
    pub code: KeyCode,
    /// Press or release.
    pub direction: Direction,
}

impl InputEvent {
    /// Press of a virtual key.
    pub const fn vk_down(vk: Scancode) -> Self {
        Self {
            code: KeyCode::Virtual(vk),
            direction: Direction::Down,
        }
    }

    /// Release of a virtual key.
    pub const fn vk_up(vk: Scancode) -> Self {
        Self {
            code: KeyCode::Virtual(vk),
            direction: Direction::Up,
        }
    }

    /// Press of a UTF-16 unit.
    pub const fn unicode_down(unit: u16) -> Self {
        Self {
            code: KeyCode::Unicode(unit),
            direction: Direction::Down,
        }
    }

    /// Release of a UTF-16 unit.
    pub const fn unicode_up(unit: u16) -> Self {
        Self {
            code: KeyCode::Unicode(unit),
            direction: Direction::Up,
        }
    }
}
