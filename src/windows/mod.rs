pub mod hotkeys;

pub use hotkeys::Win32HotkeyService;

use std::ffi::c_void;

use windows::Win32::Foundation::HWND;

use crate::host::WindowId;

#[inline]
pub fn window_id(hwnd: HWND) -> WindowId {
    WindowId::from_raw(hwnd.0 as usize)
}

#[inline]
pub fn hwnd(window: WindowId) -> HWND {
    HWND(window.raw() as *mut c_void)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::HotkeyService;

    #[test]
    fn hwnd_round_trips_through_window_id() {
        let window = WindowId::from_raw(0x0004_1A2C);
        assert_eq!(window_id(hwnd(window)), window);
    }

    #[test]
    fn wm_hotkey_matches_win32() {
        assert_eq!(
            crate::event::WM_HOTKEY,
            windows::Win32::UI::WindowsAndMessaging::WM_HOTKEY
        );
    }

    #[test]
    fn unregister_of_unknown_id_fails() {
        // No window, nothing registered under this id for the calling thread.
        assert!(!Win32HotkeyService.unregister(WindowId::INVALID, 0x7ABC));
    }
}
