//! `SendInput` backend for Windows.
//!
//! The three `user32.dll` entry points are resolved on first use and cached
//! for the life of the process. The first caller to finish resolution wins;
//! every caller would resolve the same addresses.

use std::{ffi::c_void, iter, mem};

use once_cell::sync::OnceCell;
use tracing::{debug, trace, warn};
use windows_sys::Win32::{
    System::LibraryLoader::{GetProcAddress, LoadLibraryW},
    UI::Input::KeyboardAndMouse::{
        INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYEVENTF_KEYUP, KEYEVENTF_UNICODE,
    },
};

use crate::{Backend, Direction, Error, InputEvent, KeyCode, ResolvedChar, Result};

/// `SendInput(cInputs, pInputs, cbSize)`.
type SendInputFn = unsafe extern "system" fn(u32, *const INPUT, i32) -> u32;
/// `GetKeyboardLayout(idThread)`, returning an `HKL`.
type GetKeyboardLayoutFn = unsafe extern "system" fn(u32) -> *mut c_void;
/// `VkKeyScanExW(ch, dwhkl)`.
type VkKeyScanExWFn = unsafe extern "system" fn(u16, *mut c_void) -> i16;

/// Resolved `user32.dll` entry points.
struct User32 {
    /// Input injection.
    send_input: SendInputFn,
    /// Active input locale of a thread.
    get_keyboard_layout: GetKeyboardLayoutFn,
    /// Character to virtual key under a locale.
    vk_key_scan_ex_w: VkKeyScanExWFn,
}

/// Process-wide cache of the entry points.
static USER32: OnceCell<User32> = OnceCell::new();

/// Untyped export as returned by `GetProcAddress`.
type RawProc = unsafe extern "system" fn() -> isize;

/// Look up one export, `name` being NUL-terminated.
fn proc_addr(module: *mut c_void, name: &'static [u8]) -> Result<RawProc> {
    // SAFETY: `module` is a live module handle and `name` is NUL-terminated.
    let addr = unsafe { GetProcAddress(module, name.as_ptr()) };
    addr.ok_or_else(|| {
        let name = String::from_utf8_lossy(&name[..name.len() - 1]);
        warn!(%name, "user32_export_missing");
        Error::Unavailable("user32.dll export missing")
    })
}

fn load_user32() -> Result<User32> {
    let path: Vec<u16> = "user32.dll".encode_utf16().chain(iter::once(0)).collect();
    // SAFETY: `path` is a NUL-terminated wide string that outlives the call.
    let module = unsafe { LoadLibraryW(path.as_ptr()) };
    if module.is_null() {
        warn!("user32_load_failed");
        return Err(Error::Unavailable("user32.dll could not be loaded"));
    }
    let send_input = proc_addr(module, b"SendInput\0")?;
    let get_keyboard_layout = proc_addr(module, b"GetKeyboardLayout\0")?;
    let vk_key_scan_ex_w = proc_addr(module, b"VkKeyScanExW\0")?;
    debug!("user32_resolved");
    // SAFETY: each pointer is the named export, whose ABI matches the alias
    // it is transmuted to.
    unsafe {
        Ok(User32 {
            send_input: mem::transmute::<RawProc, SendInputFn>(send_input),
            get_keyboard_layout: mem::transmute::<RawProc, GetKeyboardLayoutFn>(
                get_keyboard_layout,
            ),
            vk_key_scan_ex_w: mem::transmute::<RawProc, VkKeyScanExWFn>(vk_key_scan_ex_w),
        })
    }
}

/// Cached entry points, resolving them on first call.
fn user32() -> Result<&'static User32> {
    USER32.get_or_try_init(load_user32)
}

/// Build the `INPUT` record for one event.
fn keyboard_input(event: InputEvent) -> INPUT {
    let (w_vk, w_scan, mut flags) = match event.code {
        KeyCode::Virtual(vk) => (vk, 0, 0),
        KeyCode::Unicode(unit) => (0, unit, KEYEVENTF_UNICODE),
    };
    if event.direction == Direction::Up {
        flags |= KEYEVENTF_KEYUP;
    }
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: w_vk,
                wScan: w_scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

/// Injects events with `SendInput` and resolves characters with
/// `VkKeyScanExW` under the calling thread's layout.
pub struct SendInputBackend {
    /// Entry points shared by every backend in the process.
    user32: &'static User32,
}

impl SendInputBackend {
    /// Resolve the entry points, failing if `user32.dll` lacks them.
    pub fn new() -> Result<Self> {
        Ok(Self { user32: user32()? })
    }
}

impl Backend for SendInputBackend {
    fn send(&self, event: InputEvent) {
        trace!(code = ?event.code, direction = ?event.direction, "send_input");
        let input = keyboard_input(event);
        let size = mem::size_of::<INPUT>() as i32;
        // SAFETY: one fully initialised INPUT, with its true size.
        let sent = unsafe { (self.user32.send_input)(1, &input, size) };
        if sent != 1 {
            // Blocked by UIPI or another desktop; nothing to recover.
            debug!(code = ?event.code, direction = ?event.direction, "send_input_dropped");
        }
    }

    fn resolve_char(&self, ch: char) -> ResolvedChar {
        let Ok(unit) = u16::try_from(u32::from(ch)) else {
            return ResolvedChar::UNMAPPED;
        };
        // SAFETY: both calls take plain values; a null HKL is handled by the OS.
        let raw = unsafe {
            let layout = (self.user32.get_keyboard_layout)(0);
            (self.user32.vk_key_scan_ex_w)(unit, layout)
        };
        let resolved = ResolvedChar::from_scan_result(raw);
        trace!(?ch, vk = resolved.vk, mods = ?resolved.modifiers, "resolve_char");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vk_records() {
        let down = keyboard_input(InputEvent::vk_down(0x41));
        let up = keyboard_input(InputEvent::vk_up(0x41));
        assert_eq!(down.r#type, INPUT_KEYBOARD);
        // SAFETY: keyboard_input always fills the `ki` arm.
        let (down, up) = unsafe { (down.Anonymous.ki, up.Anonymous.ki) };
        assert_eq!(down.wVk, 0x41);
        assert_eq!(down.dwFlags, 0);
        assert_eq!(up.dwFlags, KEYEVENTF_KEYUP);
    }

    #[test]
    fn unicode_records() {
        let down = keyboard_input(InputEvent::unicode_down(0x00E9));
        let up = keyboard_input(InputEvent::unicode_up(0x00E9));
        // SAFETY: keyboard_input always fills the `ki` arm.
        let (down, up) = unsafe { (down.Anonymous.ki, up.Anonymous.ki) };
        assert_eq!(down.wVk, 0);
        assert_eq!(down.wScan, 0x00E9);
        assert_eq!(down.dwFlags, KEYEVENTF_UNICODE);
        assert_eq!(up.dwFlags, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP);
    }
}
