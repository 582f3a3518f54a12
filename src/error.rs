// Hotkey Error Handling Module
//
// Every OS interaction funnels through the two `HotkeyService` calls; their boolean
// results are translated into one of these kinds.

use thiserror::Error;

use crate::id::HotkeyId;
use crate::modifiers::Modifiers;

/// Hotkey registration error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotkeyError {
    #[error("Hotkey registration failed: id {id:#x} ({modifiers:?} + key {key:#x})")]
    RegistrationFailed {
        id: HotkeyId,
        modifiers: Modifiers,
        key: u32,
    },

    #[error("Hotkey deregistration failed: id {id:#x} may still be live")]
    DeregistrationFailed { id: HotkeyId },

    #[error("Hotkey id {id:#x} is already claimed by a different combination")]
    IdCollision { id: HotkeyId },

    #[error("Hotkey id {id:#x} is already registered for this window and combination")]
    AlreadyRegistered { id: HotkeyId },

    #[error("Invalid hotkey: {0}")]
    InvalidHotkey(String),
}

impl HotkeyError {
    /// The hotkey id this error refers to, if any.
    pub fn id(&self) -> Option<HotkeyId> {
        match self {
            HotkeyError::RegistrationFailed { id, .. }
            | HotkeyError::DeregistrationFailed { id }
            | HotkeyError::IdCollision { id }
            | HotkeyError::AlreadyRegistered { id } => Some(*id),
            HotkeyError::InvalidHotkey(_) => None,
        }
    }
}

/// Result type alias for convenience
pub type HotkeyResult<T> = Result<T, HotkeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_id_in_hex() {
        let err = HotkeyError::DeregistrationFailed { id: 0x1042 };
        assert_eq!(
            err.to_string(),
            "Hotkey deregistration failed: id 0x1042 may still be live"
        );
        assert_eq!(err.id(), Some(0x1042));
        assert_eq!(HotkeyError::InvalidHotkey("x".into()).id(), None);
    }
}
