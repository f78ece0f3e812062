//! Scripted key sequences loaded from RON.
//!
//! ```ron
//! (
//!     delay_ms: Some(10),
//!     actions: [
//!         Hotkey([Key(LWin), Char('r')]),
//!         Sleep(300),
//!         Type("notepad"),
//!         Tap(Key(Return)),
//!     ],
//! )
//! ```

use serde::{Deserialize, Serialize};
use win_keycode::Scancode;

use crate::{Error, KeyInput, Result};

/// One step of a script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Type text as Unicode input.
    Type(String),
    /// Press and release a key or character.
    Tap(KeyInput),
    /// Hold keys together, then release.
    Hotkey(Vec<KeyInput>),
    /// Press a raw virtual key.
    KeyDown(Scancode),
    /// Release a raw virtual key.
    KeyUp(Scancode),
    /// Wait this many milliseconds.
    Sleep(u64),
}

/// A list of actions with an optional delay override.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Pause between events for this script, in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,
    /// Actions in execution order.
    pub actions: Vec<Action>,
}

impl Script {
    /// Parse a script from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| Error::Script(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use win_keycode::Key;

    use super::*;

    #[test]
    fn parse_full_script() {
        let script = Script::from_ron(
            r#"(
                delay_ms: Some(5),
                actions: [
                    Hotkey([Key(LWin), Char('r')]),
                    Sleep(300),
                    Type("notepad"),
                    Tap(Key(Return)),
                    KeyDown(16),
                    KeyUp(16),
                ],
            )"#,
        )
        .expect("parse");
        assert_eq!(script.delay_ms, Some(5));
        assert_eq!(
            script.actions,
            vec![
                Action::Hotkey(vec![KeyInput::Key(Key::LWin), KeyInput::Char('r')]),
                Action::Sleep(300),
                Action::Type("notepad".into()),
                Action::Tap(KeyInput::Key(Key::Return)),
                Action::KeyDown(0x10),
                Action::KeyUp(0x10),
            ]
        );
    }

    #[test]
    fn delay_is_optional() {
        let script = Script::from_ron("(actions: [Tap(Char('x'))])").expect("parse");
        assert_eq!(script.delay_ms, None);
        assert_eq!(script.actions, vec![Action::Tap(KeyInput::Char('x'))]);
    }

    #[test]
    fn unknown_key_is_script_error() {
        let err = Script::from_ron("(actions: [Tap(Key(NotAKey))])").unwrap_err();
        assert!(matches!(err, Error::Script(_)));
    }
}
