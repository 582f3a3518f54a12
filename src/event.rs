//! Decoding of the OS hotkey notification.
//!
//! The host message loop owns dispatch; this only recognises the message and pulls the
//! id out of it so it can be compared with [`crate::HotkeyRegistration::id`].

use crate::id::HotkeyId;

/// Win32 `WM_HOTKEY`, posted to the registering window when the hotkey is pressed.
pub const WM_HOTKEY: u32 = 0x0312;

/// A decoded hotkey notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyEvent {
    pub id: HotkeyId,
}

impl HotkeyEvent {
    /// Decode a raw window message. Returns `None` for anything but `WM_HOTKEY`.
    ///
    /// `wParam` carries the id the hotkey was registered with.
    pub fn from_message(msg: u32, wparam: usize) -> Option<Self> {
        if msg != WM_HOTKEY {
            return None;
        }

        Some(Self {
            id: wparam as u32 as HotkeyId,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wm_hotkey() {
        assert_eq!(
            HotkeyEvent::from_message(WM_HOTKEY, 0x1042),
            Some(HotkeyEvent { id: 0x1042 })
        );
    }

    #[test]
    fn ignores_other_messages() {
        // WM_KEYDOWN
        assert_eq!(HotkeyEvent::from_message(0x0100, 0x1042), None);
    }

    #[test]
    fn negative_ids_survive_wparam() {
        let id: HotkeyId = -0x7FFF_EF8E;
        let wparam = id as u32 as usize;
        assert_eq!(HotkeyEvent::from_message(WM_HOTKEY, wparam).map(|e| e.id), Some(id));
    }
}
