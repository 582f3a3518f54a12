//! Hotkey description as stored in settings files.
//!
//! Stored as raw `modifiers`/`key` numbers and shown to users as `"Ctrl+Alt+S"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HotkeyError;
use crate::modifiers::Modifiers;

const VK_F1: u32 = 0x70;
const VK_F24: u32 = 0x87;

pub fn default_hotkey_modifiers() -> u32 {
    (Modifiers::CTRL | Modifiers::ALT).bits()
}

pub fn default_hotkey_key() -> u32 {
    'S' as u32
}

/// 热键配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotkeyConfig {
    #[serde(default = "default_hotkey_modifiers")]
    pub modifiers: u32,
    #[serde(default = "default_hotkey_key")]
    pub key: u32,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            modifiers: default_hotkey_modifiers(),
            key: default_hotkey_key(),
        }
    }
}

impl HotkeyConfig {
    pub fn new(modifiers: Modifiers, key: u32) -> Self {
        Self {
            modifiers: modifiers.bits(),
            key,
        }
    }

    /// Modifier mask with unknown bits dropped.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers::from_bits_truncate(self.modifiers)
    }
}

fn key_name(key: u32) -> String {
    match key {
        k if (VK_F1..=VK_F24).contains(&k) => format!("F{}", k - VK_F1 + 1),
        k if ('A' as u32..='Z' as u32).contains(&k) || ('0' as u32..='9' as u32).contains(&k) => {
            char::from_u32(k).map_or_else(|| format!("Key{k}"), |c| c.to_string())
        }
        k => format!("Key{k}"),
    }
}

fn parse_key(part: &str) -> Option<u32> {
    let mut chars = part.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        let ch = ch.to_ascii_uppercase();
        return ch.is_ascii_alphanumeric().then_some(ch as u32);
    }

    let upper = part.to_ascii_uppercase();
    if let Some(n) = upper.strip_prefix('F').and_then(|n| n.parse::<u32>().ok()) {
        return (1..=24).contains(&n).then_some(VK_F1 + n - 1);
    }
    if let Some(code) = upper.strip_prefix("KEY").and_then(|n| n.parse::<u32>().ok()) {
        return (code > 0 && code <= 0xFF).then_some(code);
    }
    None
}

impl fmt::Display for HotkeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.modifiers().names().map(str::to_string).collect();
        parts.push(key_name(self.key));
        f.write_str(&parts.join("+"))
    }
}

impl FromStr for HotkeyConfig {
    type Err = HotkeyError;

    fn from_str(hotkey_str: &str) -> Result<Self, Self::Err> {
        let invalid =
            |reason: &str| HotkeyError::InvalidHotkey(format!("{hotkey_str:?}: {reason}"));

        let mut modifiers = Modifiers::empty();
        let mut key = None;

        for part in hotkey_str.split('+').map(str::trim) {
            if part.is_empty() {
                return Err(invalid("empty component"));
            }
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= Modifiers::CTRL,
                "alt" => modifiers |= Modifiers::ALT,
                "shift" => modifiers |= Modifiers::SHIFT,
                _ => {
                    let code = parse_key(part).ok_or_else(|| invalid("unknown key"))?;
                    if key.replace(code).is_some() {
                        return Err(invalid("more than one key"));
                    }
                }
            }
        }

        let key = key.ok_or_else(|| invalid("missing key"))?;
        if modifiers.is_empty() {
            return Err(invalid("missing modifier"));
        }

        Ok(Self::new(modifiers, key))
    }
}
