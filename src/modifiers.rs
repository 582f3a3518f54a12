use bitflags::bitflags;

bitflags! {
    /// Modifier keys that must be held together with the virtual key.
    ///
    /// Bit values match the Win32 `MOD_*` constants so the mask can be handed to
    /// `RegisterHotKey` unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        const ALT   = 0x0001;
        const CTRL  = 0x0002;
        const SHIFT = 0x0004;
    }
}

impl Modifiers {
    /// Display names in the order the settings UI prints them.
    pub(crate) fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (Modifiers::CTRL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}
