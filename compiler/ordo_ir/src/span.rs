//! Opaque source location handles.

use std::fmt;

/// Handle to a source location owned by the host.
///
/// The schema never stores host span types directly. A host keeps a side
/// table of its own locations and hands out indices into it; diagnostics
/// carry the handle back so the host can point at the right tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span(u32);

impl Span {
    /// Span for items that have no location (synthesized in tests or tooling).
    pub const DUMMY: Span = Span(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        Span(index)
    }

    /// Index into the host's location table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_dummy(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dummy() {
            write!(f, "Span::DUMMY")
        } else {
            write!(f, "Span({})", self.0)
        }
    }
}
