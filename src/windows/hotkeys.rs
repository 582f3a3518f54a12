use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, RegisterHotKey, UnregisterHotKey,
};

use crate::host::WindowId;
use crate::id::HotkeyId;
use crate::modifiers::Modifiers;
use crate::service::HotkeyService;

/// Register a global hotkey.
///
/// `modifiers` is a Win32 HOT_KEY_MODIFIERS bitmask.
pub fn register_hotkey(
    hwnd: HWND,
    hotkey_id: i32,
    modifiers: u32,
    key: u32,
) -> windows::core::Result<()> {
    // SAFETY: RegisterHotKey is an OS API. Caller provides the target HWND and key/modifier values.
    unsafe { RegisterHotKey(Some(hwnd), hotkey_id, HOT_KEY_MODIFIERS(modifiers), key) }
}

/// Unregister a global hotkey associated with a window.
pub fn unregister_hotkey(hwnd: HWND, hotkey_id: i32) -> windows::core::Result<()> {
    // SAFETY: UnregisterHotKey is an OS API.
    unsafe { UnregisterHotKey(Some(hwnd), hotkey_id) }
}

/// `RegisterHotKey` / `UnregisterHotKey` from user32.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32HotkeyService;

impl HotkeyService for Win32HotkeyService {
    fn register(&self, window: WindowId, id: HotkeyId, modifiers: Modifiers, key: u32) -> bool {
        match register_hotkey(super::hwnd(window), id, modifiers.bits(), key) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("RegisterHotKey({:#x}, {:#x}) failed: {err}", window.raw(), id);
                false
            }
        }
    }

    fn unregister(&self, window: WindowId, id: HotkeyId) -> bool {
        match unregister_hotkey(super::hwnd(window), id) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("UnregisterHotKey({:#x}, {:#x}) failed: {err}", window.raw(), id);
                false
            }
        }
    }
}
