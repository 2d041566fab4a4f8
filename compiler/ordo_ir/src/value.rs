//! Value types as seen by strategy selection.
//!
//! A [`ValueType`] is the host's answer to "what can this property's type
//! do?": a coarse [`ValueKind`] plus the ordering [`Capabilities`] the type
//! is known to expose. Selection never looks at the display text.

use std::fmt;

use bitflags::bitflags;

/// Coarse classification of a property's (unwrapped) value type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Primitive integer (`i8`..`i128`, `u8`..`u128`, `isize`, `usize`).
    Integer,
    /// Primitive floating point (`f32`, `f64`).
    Float,
    /// Textual value, ordered by collation.
    Text,
    /// Anything else; ordering depends on [`Capabilities`].
    #[default]
    Other,
}

bitflags! {
    /// Ordering contracts a value type is known to implement.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u8 {
        /// Single-type total order (`Ord`).
        const TOTAL_ORDER = 1 << 0;
        /// Relational operators `<` and `>` (`PartialOrd`).
        const RELATIONAL = 1 << 1;
    }
}

impl Capabilities {
    /// Capabilities of a totally ordered type, which always has the operators too.
    pub const ORDERED: Self = Self::TOTAL_ORDER.union(Self::RELATIONAL);
}

/// The declared value type of a property.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueType {
    /// The type as written, for diagnostics and tracing.
    pub display: String,
    pub kind: ValueKind,
    pub capabilities: Capabilities,
}

impl ValueType {
    pub fn new(display: impl Into<String>, kind: ValueKind, capabilities: Capabilities) -> Self {
        ValueType {
            display: display.into(),
            kind,
            capabilities,
        }
    }

    pub fn integer(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Integer, Capabilities::ORDERED)
    }

    pub fn float(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Float, Capabilities::RELATIONAL)
    }

    pub fn text(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Text, Capabilities::empty())
    }

    /// A non-primitive type implementing `Ord`.
    pub fn ordered(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Other, Capabilities::ORDERED)
    }

    /// A non-primitive type implementing only `PartialOrd`.
    pub fn partially_ordered(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Other, Capabilities::RELATIONAL)
    }

    /// A type with no known ordering.
    pub fn opaque(display: impl Into<String>) -> Self {
        Self::new(display, ValueKind::Other, Capabilities::empty())
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, ValueKind::Integer | ValueKind::Float)
    }

    #[inline]
    pub fn is_textual(&self) -> bool {
        self.kind == ValueKind::Text
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
