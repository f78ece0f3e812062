//! Character to virtual-key resolution.
//!
//! The OS translates a character under the active keyboard layout into a
//! virtual key plus the modifiers needed to produce it. This module holds the
//! layout-independent half: decoding that translation result.

use win_keycode::{ModifierFlags, Scancode};

/// A character translated under the current keyboard layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolvedChar {
    /// Virtual key that produces the character.
    pub vk: Scancode,
    /// Modifiers that must be held while pressing `vk`.
    pub modifiers: ModifierFlags,
}

impl ResolvedChar {
    /// Sentinel for characters the layout cannot produce. Pressing vk 0 is a
    /// no-op for the OS.
    pub const UNMAPPED: Self = Self {
        vk: 0,
        modifiers: ModifierFlags::empty(),
    };

    /// Decode a `VkKeyScanEx` result: low byte is the virtual key, high byte
    /// the shift state. `-1` in both bytes means no mapping.
    pub fn from_scan_result(raw: i16) -> Self {
        let bits = raw as u16;
        let vk = bits & 0xFF;
        let state = (bits >> 8) as u8;
        if raw == -1 || vk == 0xFF {
            return Self::UNMAPPED;
        }
        Self {
            vk,
            modifiers: ModifierFlags::from_shift_state(state),
        }
    }

    /// True for the sentinel.
    pub fn is_unmapped(&self) -> bool {
        self.vk == 0
    }
}
