//! Scoped global hotkey registration.
//!
//! A [`HotkeyRegistration`] owns exactly one OS hotkey bound to one window: it is
//! registered on construction and unregistered on [`HotkeyRegistration::dispose`] or
//! drop. The host message loop compares incoming [`WM_HOTKEY`] ids against
//! [`HotkeyRegistration::id`].

pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod id;
pub mod id_table;
pub mod modifiers;
pub mod registration;
pub mod service;
pub mod testing;
#[cfg(windows)]
pub mod windows;

pub use config::HotkeyConfig;
pub use error::{HotkeyError, HotkeyResult};
pub use event::{HotkeyEvent, WM_HOTKEY};
pub use host::WindowId;
pub use id::{HotkeyId, hotkey_id};
pub use id_table::IdTable;
pub use modifiers::Modifiers;
pub use registration::HotkeyRegistration;
pub use service::HotkeyService;
#[cfg(windows)]
pub use self::windows::Win32HotkeyService;
