use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Key;

/// Modifier keys a keyboard layout can require to produce a character.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Either shift key.
    Shift,
    /// Either control key.
    Control,
    /// Either alt key (`VK_MENU`).
    Alt,
}

impl From<Modifier> for Key {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Shift => Self::Shift,
            Modifier::Control => Self::Control,
            Modifier::Alt => Self::Menu,
        }
    }
}

impl TryFrom<Key> for Modifier {
    type Error = ();
    fn try_from(k: Key) -> Result<Self, Self::Error> {
        match k {
            Key::Shift | Key::LShift | Key::RShift => Ok(Self::Shift),
            Key::Control | Key::LControl | Key::RControl => Ok(Self::Control),
            Key::Menu | Key::LMenu | Key::RMenu => Ok(Self::Alt),
            _ => Err(()),
        }
    }
}

impl Modifier {
    /// Parses a modifier specification string via key specs, then converts.
    ///
    /// Accepts anything `Key::from_spec` accepts for a modifier key, including
    /// side-specific names (`lshift`, `rctrl`) which collapse to the generic
    /// modifier. If the parsed key is not a modifier, parsing fails.
    pub fn from_spec(s: &str) -> Option<Self> {
        Key::from_spec(s).and_then(|k| Self::try_from(k).ok())
    }

    /// Returns the canonical spec string for this modifier, always lowercased.
    pub fn to_spec(self) -> String {
        match self {
            Self::Shift => "shift".to_string(),
            Self::Control => "ctrl".to_string(),
            Self::Alt => "alt".to_string(),
        }
    }

    /// The generic virtual key pressed to hold this modifier.
    pub fn key(self) -> Key {
        Key::from(self)
    }
}

bitflags! {
    /// Modifier state returned alongside a virtual key by the layout's
    /// character translation (the high byte of `VkKeyScanEx`).
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ModifierFlags: u8 {
        /// Shift must be held.
        const SHIFT = 0b001;
        /// Control must be held.
        const CONTROL = 0b010;
        /// Alt must be held.
        const ALT = 0b100;
    }
}

impl ModifierFlags {
    /// Build from the raw shift-state byte, dropping bits this crate does not
    /// model (Hankaku and the reserved driver bits).
    pub fn from_shift_state(state: u8) -> Self {
        Self::from_bits_truncate(state)
    }

    /// Modifiers in the order they are pressed: shift, control, alt.
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        [
            (Self::SHIFT, Modifier::Shift),
            (Self::CONTROL, Modifier::Control),
            (Self::ALT, Modifier::Alt),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, m)| m)
    }
}

impl From<Modifier> for ModifierFlags {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Shift => Self::SHIFT,
            Modifier::Control => Self::CONTROL,
            Modifier::Alt => Self::ALT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_modifiers() {
        for m in [Modifier::Shift, Modifier::Control, Modifier::Alt] {
            let k: Key = m.into();
            let back = Modifier::try_from(k).expect("should map back");
            assert_eq!(m, back);
        }
        assert_eq!(Modifier::try_from(Key::RMenu), Ok(Modifier::Alt));
        assert_eq!(Modifier::try_from(Key::A), Err(()));
    }

    #[test]
    fn modifier_specs() {
        assert_eq!(Modifier::from_spec("ctrl"), Some(Modifier::Control));
        assert_eq!(Modifier::from_spec("alt"), Some(Modifier::Alt));
        assert_eq!(Modifier::from_spec("menu"), Some(Modifier::Alt));
        assert_eq!(Modifier::from_spec("Shift"), Some(Modifier::Shift));
        assert_eq!(Modifier::from_spec("lshift"), Some(Modifier::Shift));
        assert_eq!(Modifier::from_spec("tab"), None);

        assert_eq!(Modifier::Control.to_spec(), "ctrl");
        assert_eq!(Modifier::Alt.key(), Key::Menu);
    }

    #[test]
    fn flags_from_shift_state() {
        assert_eq!(ModifierFlags::from_shift_state(0), ModifierFlags::empty());
        assert_eq!(ModifierFlags::from_shift_state(1), ModifierFlags::SHIFT);
        assert_eq!(
            ModifierFlags::from_shift_state(0b110),
            ModifierFlags::CONTROL | ModifierFlags::ALT
        );
        // Hankaku (8) and reserved bits are ignored.
        assert_eq!(ModifierFlags::from_shift_state(0b1001), ModifierFlags::SHIFT);
    }

    #[test]
    fn press_order_is_shift_control_alt() {
        let all = ModifierFlags::ALT | ModifierFlags::SHIFT | ModifierFlags::CONTROL;
        let order: Vec<Modifier> = all.modifiers().collect();
        assert_eq!(order, vec![Modifier::Shift, Modifier::Control, Modifier::Alt]);

        let only_alt: Vec<Modifier> = ModifierFlags::ALT.modifiers().collect();
        assert_eq!(only_alt, vec![Modifier::Alt]);
        assert_eq!(ModifierFlags::from(Modifier::Control), ModifierFlags::CONTROL);
    }
}
