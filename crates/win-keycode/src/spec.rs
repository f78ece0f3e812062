use crate::Key;

// Central mapping between enum variants and spec strings for shorthand/non-name specs.
// Symbols follow the US layout that the OEM key names are documented against.
macro_rules! key_spec_map {
    ($m:ident, $arg:tt) => {
        $m! { $arg,
            Digit0 => "0",
            Digit1 => "1",
            Digit2 => "2",
            Digit3 => "3",
            Digit4 => "4",
            Digit5 => "5",
            Digit6 => "6",
            Digit7 => "7",
            Digit8 => "8",
            Digit9 => "9",
            Space => " ",
            OemMinus => "-",
            OemPlus => "=",
            Oem4 => "[",
            Oem6 => "]",
            Oem5 => "\\",
            Oem1 => ";",
            Oem7 => "'",
            OemComma => ",",
            OemPeriod => ".",
            Oem2 => "/",
            Oem3 => "`",
        }
    };
}

macro_rules! to_spec_match {
    ( $key:expr, $( $k:ident => $s:expr, )* ) => {
        match $key {
            $( Key::$k => $s, )*
            _ => $key.name(),
        }
    }
}

macro_rules! from_spec_match {
    ( $s:expr, $( $k:ident => $v:expr, )* ) => {{
        match $s {
            $( $v => Some(Key::$k), )*
            _ => None,
        }
    }}
}

// Aliases that only apply to parsing specs (not emitted by to_spec).
macro_rules! key_spec_aliases {
    ($m:ident, $arg:expr) => {
        $m! { $arg,
            // modifiers
            Control => "ctrl",
            Menu => "alt",
            LControl => "lctrl",
            RControl => "rctrl",
            LMenu => "lalt",
            RMenu => "ralt",
            LWin => "win",
            LWin => "super",
            Capital => "caps",
            Capital => "capslock",

            // enter/return/delete variants
            Return => "enter",
            Return => "ret",
            Back => "backspace",
            Back => "bksp",
            Delete => "del",
            Insert => "ins",
            Escape => "esc",
            Space => "space",

            // spelled-out punctuation
            Oem5 => "backslash",
            OemComma => "comma",
            OemPeriod => "period",
            Oem2 => "slash",
            OemMinus => "minus",
            OemPlus => "equal",
            OemPlus => "plus",
            Oem1 => "semicolon",
            Oem7 => "quote",
            Oem3 => "grave",
            Oem4 => "leftbracket",
            Oem6 => "rightbracket",

            // navigation
            Prior => "pgup",
            Prior => "pageup",
            Next => "pgdn",
            Next => "pagedown",
            Apps => "contextmenu",
            Snapshot => "prtsc",
            Snapshot => "printscreen",
            Scroll => "scrolllock",

            // media
            VolumeMute => "mute",
            MediaPlayPause => "playpause",
            MediaNextTrack => "nexttrack",
            MediaPrevTrack => "prevtrack",
        }
    };
}

/// Parses a key specification into a `Key`.
///
/// First tries a case-insensitive enum name (via `Key::from_name`). If that
/// fails, falls back to shorthand specs like digits and punctuation centrally
/// defined in `key_spec_map`.
pub fn from_spec(s: &str) -> Option<Key> {
    if let Some(k) = Key::from_name(s) {
        return Some(k);
    }
    if let some @ Some(_) = key_spec_map!(from_spec_match, s) {
        return some;
    }
    let lowered = s.to_ascii_lowercase();
    key_spec_aliases!(from_spec_match, lowered.as_str())
}

/// Returns the key specification string for a `Key`.
///
/// Uses centrally defined shorthand first (digits, punctuation), then falls
/// back to the enum variant name.
pub fn to_spec(key: Key) -> String {
    let s = key_spec_map!(to_spec_match, key);
    s.to_ascii_lowercase()
}

impl Key {
    /// Parses a key specification string into a `Key`.
    ///
    /// Spec parsing differs from `from_name` as follows:
    /// - Accepts symbol shorthands for digits and punctuation, and space.
    ///   This includes: 0–9, `-`, `=`, `[`, `]`, `\\`, `;`, `'`, `,`, `.`, `/`, and `` ` ``.
    /// - Accepts common alias words (case-insensitive), including: enter, ret, esc,
    ///   ctrl, alt, win, caps, del, ins, backspace, pgup, pgdn, prtsc.
    ///   Returns `None` if no mapping matches.
    pub fn from_spec(s: &str) -> Option<Self> {
        from_spec(s)
    }

    /// Returns the key specification string for this `Key`.
    ///
    /// For digits, punctuation, and space, returns the symbol form (e.g., `OemComma`
    /// emits ","). For all other keys, returns the lowercased variant name.
    pub fn to_spec(self) -> String {
        to_spec(self)
    }
}
