/// Opaque window identifier.
///
/// Keeps platform window handles (e.g. Win32 `HWND`) out of the public API. The
/// platform backend converts to and from the raw handle as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

impl WindowId {
    pub const INVALID: WindowId = WindowId(0);

    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::INVALID
    }
}
