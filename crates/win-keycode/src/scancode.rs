//! Scancodes (Windows virtual-key codes) and conversions.
//!
//! A "scancode" in this crate refers to the Windows virtual-key code:
//! - The value carried in `KEYBDINPUT.wVk` when injecting input.
//! - The set of constants prefixed `VK_` in `WinUser.h`.
//! - A layout-dependent identifier for a key. It is not a hardware scan
//!   code (`wScan`), not a USB HID usage ID, and not Unicode.

use crate::Key;

/// Windows virtual-key code (`VK_*`).
pub type Scancode = u16;

/// Returns true if the scancode maps to a known `Key` variant.
pub fn is_valid(sc: Scancode) -> bool {
    Key::from_vk(sc).is_some()
}

impl TryFrom<Scancode> for Key {
    type Error = ();
    fn try_from(value: Scancode) -> Result<Self, Self::Error> {
        Self::from_vk(value).ok_or(())
    }
}

impl From<Key> for Scancode {
    fn from(k: Key) -> Self {
        k.vk()
    }
}
