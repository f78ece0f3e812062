//! Seams between the sequencer and the outside world.
//!
//! A [`Backend`] delivers single events and translates characters; a [`Pace`]
//! blocks between events. Both are swapped for recording doubles in tests.

use std::{thread, time::Duration};

use crate::{InputEvent, ResolvedChar};

/// Delivers keyboard events to the OS.
pub trait Backend: Send + Sync {
    /// Submit exactly one event. Delivery is best-effort and unconfirmed.
    fn send(&self, event: InputEvent);

    /// Translate a character under the active keyboard layout.
    fn resolve_char(&self, ch: char) -> ResolvedChar;
}

/// Blocks the calling thread between events.
pub trait Pace: Send + Sync {
    /// Wait for `delay`.
    fn pause(&self, delay: Duration);
}

/// Real-time pacing with `thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Pace for ThreadSleep {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// One observable step taken by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An event handed to the backend.
    Send(InputEvent),
    /// A pause handed to the pacer.
    Pause(Duration),
}

#[cfg(any(test, feature = "test-utils"))]
pub use recording::Recorder;

#[cfg(any(test, feature = "test-utils"))]
mod recording {
    use std::{collections::HashMap, time::Duration};

    use parking_lot::Mutex;

    use super::{Backend, Pace, Step};
    use crate::{InputEvent, ResolvedChar};

    /// Backend and pacer that record every step instead of touching the OS.
    ///
    /// Characters resolve through a fixed table; anything not in it is
    /// unmapped.
    #[derive(Default)]
    pub struct Recorder {
        /// Steps in the order they were taken.
        steps: Mutex<Vec<Step>>,
        /// Character translations to report.
        layout: HashMap<char, ResolvedChar>,
    }

    impl Recorder {
        /// Recorder with an empty layout.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a character translation.
        pub fn with_char(mut self, ch: char, resolved: ResolvedChar) -> Self {
            self.layout.insert(ch, resolved);
            self
        }

        /// Snapshot of every step so far.
        pub fn steps(&self) -> Vec<Step> {
            self.steps.lock().clone()
        }

        /// Only the events, without pauses.
        pub fn events(&self) -> Vec<InputEvent> {
            self.steps
                .lock()
                .iter()
                .filter_map(|s| match s {
                    Step::Send(ev) => Some(*ev),
                    Step::Pause(_) => None,
                })
                .collect()
        }

        /// Forget everything recorded so far.
        pub fn clear(&self) {
            self.steps.lock().clear();
        }
    }

    impl Backend for Recorder {
        fn send(&self, event: InputEvent) {
            self.steps.lock().push(Step::Send(event));
        }

        fn resolve_char(&self, ch: char) -> ResolvedChar {
            self.layout
                .get(&ch)
                .copied()
                .unwrap_or(ResolvedChar::UNMAPPED)
        }
    }

    impl Pace for Recorder {
        fn pause(&self, delay: Duration) {
            self.steps.lock().push(Step::Pause(delay));
        }
    }
}
