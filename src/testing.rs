//! In-memory [`HotkeyService`] for tests and for hosts without a real hotkey table.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::host::WindowId;
use crate::id::HotkeyId;
use crate::modifiers::Modifiers;
use crate::service::HotkeyService;

/// One recorded call into the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCall {
    Register {
        window: WindowId,
        id: HotkeyId,
        modifiers: Modifiers,
        key: u32,
    },
    Unregister {
        window: WindowId,
        id: HotkeyId,
    },
}

/// Records calls and answers with configurable results.
///
/// Successful registrations are kept in a table keyed by (window, id). Like the OS,
/// registering a live (window, id) pair and unregistering an unknown one both fail,
/// whatever the configured results say. Single-threaded like the facility it stands in
/// for.
#[derive(Debug)]
pub struct MockHotkeyService {
    register_result: Cell<bool>,
    unregister_result: Cell<bool>,
    calls: RefCell<Vec<ServiceCall>>,
    live: RefCell<HashMap<(WindowId, HotkeyId), (Modifiers, u32)>>,
}

impl Default for MockHotkeyService {
    fn default() -> Self {
        Self {
            register_result: Cell::new(true),
            unregister_result: Cell::new(true),
            calls: RefCell::default(),
            live: RefCell::default(),
        }
    }
}

impl MockHotkeyService {
    /// A service on which every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_register_result(&self, ok: bool) {
        self.register_result.set(ok);
    }

    pub fn set_unregister_result(&self, ok: bool) {
        self.unregister_result.set(ok);
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.borrow().clone()
    }

    pub fn register_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ServiceCall::Register { .. }))
            .count()
    }

    pub fn unregister_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ServiceCall::Unregister { .. }))
            .count()
    }

    /// Whether (window, id) is currently registered.
    pub fn is_live(&self, window: WindowId, id: HotkeyId) -> bool {
        self.live.borrow().contains_key(&(window, id))
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl HotkeyService for MockHotkeyService {
    fn register(&self, window: WindowId, id: HotkeyId, modifiers: Modifiers, key: u32) -> bool {
        self.calls.borrow_mut().push(ServiceCall::Register {
            window,
            id,
            modifiers,
            key,
        });

        let mut live = self.live.borrow_mut();
        if !self.register_result.get() || live.contains_key(&(window, id)) {
            return false;
        }
        live.insert((window, id), (modifiers, key));
        true
    }

    fn unregister(&self, window: WindowId, id: HotkeyId) -> bool {
        self.calls
            .borrow_mut()
            .push(ServiceCall::Unregister { window, id });

        if !self.unregister_result.get() {
            return false;
        }
        self.live.borrow_mut().remove(&(window, id)).is_some()
    }
}
