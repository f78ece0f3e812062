//! win-keycode: Virtual-key codes and specs for Windows.
//!
//! - `Key`: Enum of the named Windows virtual keys.
//! - `Modifier`: The three modifiers a character translation can require,
//!   with conversions to/from `Key`.
//! - `ModifierFlags`: Bitset form of the modifier state reported by the
//!   keyboard layout.
//! - Spec helpers: `Key::from_spec`, `Key::to_spec`, and
//!   `Modifier::from_spec`, `Modifier::to_spec`.
//!
//! Values follow the documented `VK_*` numbering. Variant names are the
//! `VK_` constants in CamelCase with digits prefixed by `Digit`. Several keys
//! share a code (`Kana`/`Hangul`, `Hanja`/`Kanji`), so `Key` is not
//! `repr(u16)`; use `Key::vk` for the numeric value.

mod key;
pub use key::Key;

mod spec;

mod modifiers;
pub use modifiers::{Modifier, ModifierFlags};

mod scancode;
pub use scancode::{Scancode, is_valid};
