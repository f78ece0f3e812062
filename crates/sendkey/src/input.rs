//! Key-or-character arguments accepted by [`Keyboard`](crate::Keyboard).

use std::fmt;

use serde::{Deserialize, Serialize};
use win_keycode::Key;

use crate::{Error, Result};

/// Either a named key or a character resolved through the keyboard layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum KeyInput {
    /// A named virtual key.
    Key(Key),
    /// A character translated under the active layout.
    Char(char),
}

impl From<Key> for KeyInput {
    fn from(k: Key) -> Self {
        Self::Key(k)
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl TryFrom<u32> for KeyInput {
    type Error = Error;

    /// Interprets the value as a Unicode code point.
    fn try_from(cp: u32) -> Result<Self> {
        char::from_u32(cp)
            .map(Self::Char)
            .ok_or_else(|| Error::invalid(format!("not a Unicode scalar value: {cp:#x}")))
    }
}

impl TryFrom<&str> for KeyInput {
    type Error = Error;

    /// A single character is a `Char`; anything longer must be a key spec
    /// (`"enter"`, `"f12"`, `"ctrl"`).
    fn try_from(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }
        Key::from_spec(s.trim())
            .map(Self::Key)
            .ok_or_else(|| Error::invalid(format!("unknown key: {s:?}")))
    }
}

impl TryFrom<&String> for KeyInput {
    type Error = Error;

    fn try_from(s: &String) -> Result<Self> {
        Self::try_from(s.as_str())
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => write!(f, "{}", k.to_spec()),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Parses a chord specification of the form "ctrl+shift+esc" into keys in
/// press order.
///
/// - Components are separated by "+"; each goes through `KeyInput::try_from`.
/// - A trailing "++" names the plus character itself ("ctrl++").
/// - Single characters are kept raw so "ctrl+ " holds space.
pub fn parse_chord(s: &str) -> Result<Vec<KeyInput>> {
    if s == "+" {
        return Ok(vec![KeyInput::Char('+')]);
    }
    let (head, last) = match s.strip_suffix("++") {
        Some(head) => (head, "+"),
        None => match s.rsplit_once('+') {
            Some((head, last)) => (head, last),
            None => ("", s),
        },
    };
    let mut keys = Vec::new();
    if !head.is_empty() {
        for part in head.split('+') {
            let part = part.trim();
            if part.is_empty() {
                return Err(Error::invalid(format!("empty component in chord {s:?}")));
            }
            keys.push(KeyInput::try_from(part)?);
        }
    }
    let last = if last.chars().count() == 1 {
        last
    } else {
        last.trim()
    };
    if last.is_empty() {
        return Err(Error::invalid(format!("missing key in chord {s:?}")));
    }
    keys.push(KeyInput::try_from(last)?);
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_is_char() {
        assert_eq!(KeyInput::try_from("a").unwrap(), KeyInput::Char('a'));
        assert_eq!(KeyInput::try_from("A").unwrap(), KeyInput::Char('A'));
        assert_eq!(KeyInput::try_from("é").unwrap(), KeyInput::Char('é'));
    }

    #[test]
    fn names_are_keys() {
        assert_eq!(KeyInput::try_from("enter").unwrap(), KeyInput::Key(Key::Return));
        assert_eq!(KeyInput::try_from("F12").unwrap(), KeyInput::Key(Key::F12));
        assert_eq!(KeyInput::try_from("ctrl").unwrap(), KeyInput::Key(Key::Control));
    }

    #[test]
    fn rejects_unknown() {
        assert!(matches!(
            KeyInput::try_from("nonsense"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(KeyInput::try_from(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            KeyInput::try_from(0xD800u32),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(KeyInput::try_from(0x41u32).unwrap(), KeyInput::Char('A'));
    }

    #[test]
    fn chords() {
        assert_eq!(
            parse_chord("ctrl+shift+esc").unwrap(),
            vec![
                KeyInput::Key(Key::Control),
                KeyInput::Key(Key::Shift),
                KeyInput::Key(Key::Escape),
            ]
        );
        assert_eq!(
            parse_chord("ctrl + c").unwrap(),
            vec![KeyInput::Key(Key::Control), KeyInput::Char('c')]
        );
        assert_eq!(
            parse_chord("ctrl++").unwrap(),
            vec![KeyInput::Key(Key::Control), KeyInput::Char('+')]
        );
        assert_eq!(
            parse_chord("ctrl+ ").unwrap(),
            vec![KeyInput::Key(Key::Control), KeyInput::Char(' ')]
        );
        assert_eq!(parse_chord("tab").unwrap(), vec![KeyInput::Key(Key::Tab)]);
        assert_eq!(parse_chord("+").unwrap(), vec![KeyInput::Char('+')]);
    }

    #[test]
    fn bad_chords() {
        assert!(parse_chord("ctrl+").is_err());
        assert!(parse_chord("ctrl++shift+a").is_err());
        assert!(parse_chord("ctrl+bogus").is_err());
        assert!(parse_chord("").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(KeyInput::Key(Key::Return).to_string(), "return");
        assert_eq!(KeyInput::Char('x').to_string(), "x");
    }
}
