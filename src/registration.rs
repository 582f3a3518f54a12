use std::marker::PhantomData;

use crate::config::HotkeyConfig;
use crate::error::{HotkeyError, HotkeyResult};
use crate::event::HotkeyEvent;
use crate::host::WindowId;
use crate::id::{HotkeyId, hotkey_id};
use crate::id_table::{Combination, IdTable};
use crate::modifiers::Modifiers;
use crate::service::HotkeyService;

/// One global hotkey registered for one window.
///
/// The registration is acquired by [`HotkeyRegistration::new`] and released by
/// [`dispose`](Self::dispose) or, at the latest, when the value is dropped. The id is
/// fixed for the life of the value so the message loop can cache it and compare it
/// against incoming `WM_HOTKEY` notifications.
///
/// The OS ties hotkeys to the thread that owns the window, so this type is neither
/// `Send` nor `Sync`.
#[derive(Debug)]
pub struct HotkeyRegistration<S: HotkeyService> {
    service: S,
    window: WindowId,
    modifiers: Modifiers,
    key: u32,
    id: HotkeyId,
    registered: bool,
    _thread_bound: PhantomData<*const ()>,
}

impl<S: HotkeyService> HotkeyRegistration<S> {
    /// Register `modifiers + key` for `window`.
    ///
    /// Either returns a registered hotkey or fails with nothing left behind: no OS
    /// registration and no claim in the id table.
    pub fn new(
        service: S,
        window: WindowId,
        key: u32,
        modifiers: Modifiers,
    ) -> HotkeyResult<Self> {
        let mut hotkey = Self {
            service,
            window,
            modifiers,
            key,
            id: hotkey_id(modifiers, key, window),
            registered: false,
            _thread_bound: PhantomData,
        };

        // Dropping an unregistered value touches neither the OS nor the id table.
        hotkey
            .try_register()
            .inspect_err(|err| log::warn!("{err}"))?;

        Ok(hotkey)
    }

    /// Register the combination described by a settings entry.
    pub fn from_config(
        service: S,
        window: WindowId,
        config: &HotkeyConfig,
    ) -> HotkeyResult<Self> {
        Self::new(service, window, config.key, config.modifiers())
    }

    fn combination(&self) -> Combination {
        Combination {
            window: self.window,
            modifiers: self.modifiers,
            key: self.key,
        }
    }

    /// The id is claimed for exactly as long as the hotkey is registered.
    fn try_register(&mut self) -> HotkeyResult<()> {
        let claim_needed = !self.registered;
        if claim_needed {
            IdTable::global().claim(self.id, self.combination())?;
        }

        if self
            .service
            .register(self.window, self.id, self.modifiers, self.key)
        {
            self.registered = true;
            log::debug!(
                "registered hotkey {:#x} for window {:#x}",
                self.id,
                self.window.raw()
            );
            return Ok(());
        }

        if claim_needed {
            IdTable::global().release(self.id, self.combination());
        }
        Err(HotkeyError::RegistrationFailed {
            id: self.id,
            modifiers: self.modifiers,
            key: self.key,
        })
    }

    /// Ask the OS for the hotkey. Returns `true` on success.
    ///
    /// Fails without asking the OS when the id is held by another live registration.
    /// A failure leaves the current state untouched, so this can simply be called
    /// again.
    pub fn register(&mut self) -> bool {
        match self.try_register() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{err} (window {:#x})", self.window.raw());
                false
            }
        }
    }

    /// Give the hotkey back to the OS and release its id.
    ///
    /// A no-op when not registered. If the OS refuses, the hotkey is still considered
    /// registered, keeps its id and [`HotkeyError::DeregistrationFailed`] is returned.
    pub fn deregister(&mut self) -> HotkeyResult<()> {
        if !self.registered {
            return Ok(());
        }

        if self.service.unregister(self.window, self.id) {
            self.registered = false;
            IdTable::global().release(self.id, self.combination());
            log::debug!(
                "unregistered hotkey {:#x} for window {:#x}",
                self.id,
                self.window.raw()
            );
            Ok(())
        } else {
            self.registered = true;
            Err(HotkeyError::DeregistrationFailed { id: self.id })
        }
    }

    /// Explicit early release. Safe to call any number of times.
    ///
    /// On success the id is free for other combinations right away, even while this
    /// value is still alive. Unlike dropping, a deregistration failure is returned to
    /// the caller; the value stays registered and dropping it will try again.
    pub fn dispose(&mut self) -> HotkeyResult<()> {
        self.deregister()
    }

    pub fn id(&self) -> HotkeyId {
        self.id
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn key(&self) -> u32 {
        self.key
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Whether `event` was caused by this registration.
    pub fn matches(&self, event: &HotkeyEvent) -> bool {
        event.id == self.id
    }

    /// Whether a raw window message is this hotkey firing.
    pub fn matches_message(&self, msg: u32, wparam: usize) -> bool {
        HotkeyEvent::from_message(msg, wparam).is_some_and(|event| self.matches(&event))
    }
}

impl<S: HotkeyService> Drop for HotkeyRegistration<S> {
    fn drop(&mut self) {
        // On failure the OS entry is still live, so the id stays claimed.
        if let Err(err) = self.deregister() {
            log::error!("{err} (while dropping hotkey registration)");
        }
    }
}
