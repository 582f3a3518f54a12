//! Process-wide table of claimed hotkey ids.
//!
//! `RegisterHotKey` ids are compared by value in the message loop, so two live
//! registrations with the same id but different key combinations would misroute
//! notifications. An id is held by at most one live registration; a second registration
//! of the same combination would share one OS entry and is refused as well.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{HotkeyError, HotkeyResult};
use crate::host::WindowId;
use crate::id::HotkeyId;
use crate::modifiers::Modifiers;

static GLOBAL_TABLE: OnceLock<IdTable> = OnceLock::new();

/// The (window, modifiers, key) combination an id was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub window: WindowId,
    pub modifiers: Modifiers,
    pub key: u32,
}

#[derive(Debug, Default)]
pub struct IdTable {
    claims: Mutex<HashMap<HotkeyId, Combination>>,
}

impl IdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shared by every `HotkeyRegistration` in the process.
    pub fn global() -> &'static IdTable {
        GLOBAL_TABLE.get_or_init(IdTable::new)
    }

    /// Claim `id` for `combination`.
    ///
    /// Fails with [`HotkeyError::AlreadyRegistered`] when the same combination already
    /// holds the id and with [`HotkeyError::IdCollision`] when a different one does.
    pub fn claim(&self, id: HotkeyId, combination: Combination) -> HotkeyResult<()> {
        let mut claims = self.claims.lock();
        match claims.get(&id) {
            Some(owner) if *owner == combination => Err(HotkeyError::AlreadyRegistered { id }),
            Some(owner) => {
                log::warn!(
                    "hotkey id {:#x} for {:?} collides with {:?}",
                    id,
                    combination,
                    owner
                );
                Err(HotkeyError::IdCollision { id })
            }
            None => {
                claims.insert(id, combination);
                Ok(())
            }
        }
    }

    /// Give up `id`. Releasing an id held by another combination is ignored.
    pub fn release(&self, id: HotkeyId, combination: Combination) {
        let mut claims = self.claims.lock();
        if claims.get(&id) == Some(&combination) {
            claims.remove(&id);
        }
    }

    /// The combination currently holding `id`.
    pub fn owner(&self, id: HotkeyId) -> Option<Combination> {
        self.claims.lock().get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.claims.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
