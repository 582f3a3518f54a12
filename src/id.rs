//! Hotkey identifier derivation.

use crate::host::WindowId;
use crate::modifiers::Modifiers;

/// Identifier passed to the OS and echoed back in `WM_HOTKEY`'s `wParam`.
pub type HotkeyId = i32;

/// Derive the id for a (modifiers, key, window) triple.
///
/// The three values are XOR-mixed and truncated to the 32-bit width `RegisterHotKey`
/// accepts. Equal triples always give equal ids; distinct triples may collide, which
/// is what [`crate::id_table`] guards against.
#[inline]
pub fn hotkey_id(modifiers: Modifiers, key: u32, window: WindowId) -> HotkeyId {
    (modifiers.bits() ^ key ^ window.raw() as u32) as HotkeyId
}
