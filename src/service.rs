use std::rc::Rc;
use std::sync::Arc;

use crate::host::WindowId;
use crate::id::HotkeyId;
use crate::modifiers::Modifiers;

/// The OS global-hotkey facility.
///
/// Both calls are synchronous and report success as a plain `bool`; translating a
/// failure into a [`crate::HotkeyError`] is the caller's job. Implementations are
/// expected to be called from the thread that owns `window`.
pub trait HotkeyService {
    fn register(&self, window: WindowId, id: HotkeyId, modifiers: Modifiers, key: u32) -> bool;

    fn unregister(&self, window: WindowId, id: HotkeyId) -> bool;
}

impl<S: HotkeyService + ?Sized> HotkeyService for &S {
    fn register(&self, window: WindowId, id: HotkeyId, modifiers: Modifiers, key: u32) -> bool {
        (**self).register(window, id, modifiers, key)
    }

    fn unregister(&self, window: WindowId, id: HotkeyId) -> bool {
        (**self).unregister(window, id)
    }
}

impl<S: HotkeyService + ?Sized> HotkeyService for Rc<S> {
    fn register(&self, window: WindowId, id: HotkeyId, modifiers: Modifiers, key: u32) -> bool {
        (**self).register(window, id, modifiers, key)
    }

    fn unregister(&self, window: WindowId, id: HotkeyId) -> bool {
        (**self).unregister(window, id)
    }
}

impl<S: HotkeyService + ?Sized> HotkeyService for Arc<S> {
    fn register(&self, window: WindowId, id: HotkeyId, modifiers: Modifiers, key: u32) -> bool {
        (**self).register(window, id, modifiers, key)
    }

    fn unregister(&self, window: WindowId, id: HotkeyId) -> bool {
        (**self).unregister(window, id)
    }
}
