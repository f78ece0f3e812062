use std::{sync::Arc, time::Duration};

use tracing::{debug, trace, warn};
use win_keycode::Scancode;

use crate::{Action, Backend, Error, InputEvent, KeyInput, Pace, ResolvedChar, Result, Script};

/// Pause after each press or release unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(20);

/// Sequences key presses and releases with a fixed pause between them.
///
/// Every operation blocks until its last event has been sent. Nothing
/// coordinates concurrent callers: their events interleave at the OS.
#[derive(Clone)]
pub struct Keyboard {
    /// Event sink and character resolver.
    backend: Arc<dyn Backend>,
    /// Blocks between events.
    pacer: Arc<dyn Pace>,
    /// Pause taken after each press, and after each release of a tapped key.
    delay: Duration,
}

impl Keyboard {
    /// Keyboard backed by `SendInput`, sleeping [`DEFAULT_DELAY`] between events.
    #[cfg(windows)]
    pub fn new() -> Result<Self> {
        let backend = crate::sys::SendInputBackend::new()?;
        Ok(Self::with_backend(Arc::new(backend), Arc::new(crate::ThreadSleep)))
    }

    /// Keyboard backed by `SendInput`; always unavailable off Windows.
    #[cfg(not(windows))]
    pub fn new() -> Result<Self> {
        warn!("input_injection_unsupported_platform");
        Err(Error::Unavailable("keyboard injection requires Windows"))
    }

    /// Keyboard over an arbitrary backend and pacer.
    pub fn with_backend(backend: Arc<dyn Backend>, pacer: Arc<dyn Pace>) -> Self {
        Self {
            backend,
            pacer,
            delay: DEFAULT_DELAY,
        }
    }

    /// Replace the pause between events.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Current pause between events.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Press a raw virtual key. No pause follows.
    pub fn key_down(&self, vk: Scancode) {
        trace!(vk, "key_down");
        self.backend.send(InputEvent::vk_down(vk));
    }

    /// Release a raw virtual key. No pause follows.
    pub fn key_up(&self, vk: Scancode) {
        trace!(vk, "key_up");
        self.backend.send(InputEvent::vk_up(vk));
    }

    /// Type `text` as Unicode input, one character at a time.
    ///
    /// Each UTF-16 unit is pressed and released with a pause after both. No
    /// modifiers are simulated, so the result does not depend on the keyboard
    /// layout. Characters outside the Basic Multilingual Plane go out as their
    /// two surrogate units.
    pub fn type_text(&self, text: &str) {
        debug!(chars = text.chars().count(), "type_text");
        let mut buf = [0u16; 2];
        for ch in text.chars() {
            for &unit in ch.encode_utf16(&mut buf).iter() {
                self.backend.send(InputEvent::unicode_down(unit));
                self.pause();
                self.backend.send(InputEvent::unicode_up(unit));
                self.pause();
            }
        }
    }

    /// Press and release one key or character.
    ///
    /// A character is translated through the active layout. Modifiers it
    /// requires are pressed first (shift, control, alt) and released after
    /// the key in that same order.
    ///
    /// Fails with [`Error::InvalidArgument`], sending nothing, if `key` does
    /// not convert to a [`KeyInput`].
    pub fn tap<K>(&self, key: K) -> Result<()>
    where
        K: TryInto<KeyInput>,
        Error: From<K::Error>,
    {
        let key = key.try_into()?;
        debug!(%key, "tap");
        match key {
            KeyInput::Key(k) => self.press_release(k.vk()),
            KeyInput::Char(ch) => self.tap_char(ch),
        }
        Ok(())
    }

    /// Hold several keys at once, then let go.
    ///
    /// Keys are pressed front to back with a pause after each, then released
    /// last-pressed first without pauses: `[A, B]` sends press A, press B,
    /// release B, release A. Characters contribute their virtual key only;
    /// the modifiers their layout would require are not added.
    ///
    /// Every key is converted before anything is sent. An empty chord or an
    /// unconvertible key fails with [`Error::InvalidArgument`].
    pub fn hotkey<I>(&self, keys: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: TryInto<KeyInput>,
        Error: From<<I::Item as TryInto<KeyInput>>::Error>,
    {
        let keys = keys
            .into_iter()
            .map(|k| k.try_into().map_err(Error::from))
            .collect::<Result<Vec<KeyInput>>>()?;
        if keys.is_empty() {
            return Err(Error::invalid("hotkey needs at least one key"));
        }
        debug!(keys = keys.len(), "hotkey");
        let codes: Vec<Scancode> = keys.iter().map(|k| self.vk_for(*k)).collect();
        for &vk in &codes {
            self.key_down(vk);
            self.pause();
        }
        for &vk in codes.iter().rev() {
            self.key_up(vk);
        }
        Ok(())
    }

    /// Run every action of a script in order, stopping at the first error.
    ///
    /// A script-level delay applies to this run only.
    pub fn run(&self, script: &Script) -> Result<()> {
        let kb = match script.delay_ms {
            Some(ms) => self.clone().with_delay(Duration::from_millis(ms)),
            None => self.clone(),
        };
        debug!(actions = script.actions.len(), delay = ?kb.delay, "run_script");
        for action in &script.actions {
            kb.perform(action)?;
        }
        Ok(())
    }

    /// Run a single script action.
    pub fn perform(&self, action: &Action) -> Result<()> {
        match action {
            Action::Type(text) => self.type_text(text),
            Action::Tap(key) => self.tap(*key)?,
            Action::Hotkey(keys) => self.hotkey(keys.iter().copied())?,
            Action::KeyDown(vk) => self.key_down(*vk),
            Action::KeyUp(vk) => self.key_up(*vk),
            Action::Sleep(ms) => self.pacer.pause(Duration::from_millis(*ms)),
        }
        Ok(())
    }

    fn pause(&self) {
        self.pacer.pause(self.delay);
    }

    fn press_release(&self, vk: Scancode) {
        self.key_down(vk);
        self.pause();
        self.key_up(vk);
        self.pause();
    }

    fn resolve(&self, ch: char) -> ResolvedChar {
        let resolved = self.backend.resolve_char(ch);
        if resolved.is_unmapped() {
            warn!(?ch, "char_unmapped");
        }
        resolved
    }

    fn tap_char(&self, ch: char) {
        let resolved = self.resolve(ch);
        let mods: Vec<Scancode> = resolved
            .modifiers
            .modifiers()
            .map(|m| m.key().vk())
            .collect();
        for &vk in &mods {
            self.key_down(vk);
            self.pause();
        }
        self.press_release(resolved.vk);
        // Same order as pressed.
        for &vk in &mods {
            self.key_up(vk);
        }
    }

    fn vk_for(&self, key: KeyInput) -> Scancode {
        match key {
            KeyInput::Key(k) => k.vk(),
            KeyInput::Char(ch) => self.resolve(ch).vk,
        }
    }
}
