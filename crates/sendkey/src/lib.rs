//! Synthesizes keyboard input on Windows.
//!
//! A [`Keyboard`] types Unicode text, taps named keys or layout-resolved
//! characters, and holds hotkey chords. Each press or release becomes one
//! `SendInput` call, paced by a fixed delay (20 ms unless configured).
//!
//! Injected events are indistinguishable from hardware input and land in
//! whichever window has focus. Delivery is best-effort: the OS may drop
//! events (for example when a higher-integrity window is focused) and this
//! crate does not report it.
//!
//! ```no_run
//! use sendkey::{Key, KeyInput, Keyboard};
//!
//! let kb = Keyboard::new()?;
//! kb.hotkey([KeyInput::from(Key::LWin), KeyInput::from('r')])?;
//! kb.type_text("notepad");
//! kb.tap(Key::Return)?;
//! # Ok::<(), sendkey::Error>(())
//! ```
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

mod backend;
mod error;
mod event;
mod input;
mod keyboard;
mod resolve;
mod script;
#[cfg(windows)]
mod sys;

#[cfg(any(test, feature = "test-utils"))]
pub use backend::Recorder;
pub use backend::{Backend, Pace, Step, ThreadSleep};
pub use error::{Error, Result};
pub use event::{Direction, InputEvent, KeyCode};
pub use input::{KeyInput, parse_chord};
pub use keyboard::{DEFAULT_DELAY, Keyboard};
pub use resolve::ResolvedChar;
pub use script::{Action, Script};
#[cfg(windows)]
pub use sys::SendInputBackend;
pub use win_keycode::{Key, Modifier, ModifierFlags, Scancode};
