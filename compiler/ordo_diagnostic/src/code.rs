//! Stable diagnostic codes.
//!
//! Codes are part of the public contract: tooling matches on the string
//! form, so variants are never renamed.

use std::fmt;

/// Stable identifiers for every diagnostic comparison generation can raise.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCode {
    /// Target type has no instances
    StaticTargetTypeError,
    /// Explicit type argument does not name a usable type
    InvalidTypeArgumentError,
    /// Target already declares a member named like the generated method
    GetComparisonMethodCollisionError,
    /// No property survived strategy selection
    NoComparablePropertyFoundWarning,
    /// Two properties share a name after renaming
    DuplicatePropertyNameError,
    /// A property name is not a valid identifier
    InvalidPropertyNameError,
}

impl DiagnosticCode {
    pub const ALL: &[DiagnosticCode] = &[
        DiagnosticCode::StaticTargetTypeError,
        DiagnosticCode::InvalidTypeArgumentError,
        DiagnosticCode::GetComparisonMethodCollisionError,
        DiagnosticCode::NoComparablePropertyFoundWarning,
        DiagnosticCode::DuplicatePropertyNameError,
        DiagnosticCode::InvalidPropertyNameError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::StaticTargetTypeError => "StaticTargetTypeError",
            DiagnosticCode::InvalidTypeArgumentError => "InvalidTypeArgumentError",
            DiagnosticCode::GetComparisonMethodCollisionError => {
                "GetComparisonMethodCollisionError"
            }
            DiagnosticCode::NoComparablePropertyFoundWarning => "NoComparablePropertyFoundWarning",
            DiagnosticCode::DuplicatePropertyNameError => "DuplicatePropertyNameError",
            DiagnosticCode::InvalidPropertyNameError => "InvalidPropertyNameError",
        }
    }

    /// Whether diagnostics with this code are warnings rather than errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, DiagnosticCode::NoComparablePropertyFoundWarning)
    }

    /// One-line description, used for `note:` lines and documentation.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticCode::StaticTargetTypeError => {
                "comparison dispatchers compare instances, and this type has none"
            }
            DiagnosticCode::InvalidTypeArgumentError => {
                "the explicit target must be the annotated type with concrete generic arguments"
            }
            DiagnosticCode::GetComparisonMethodCollisionError => {
                "the generated method would shadow or clash with an existing member"
            }
            DiagnosticCode::NoComparablePropertyFoundWarning => {
                "the generated dispatcher reports every property name as not found"
            }
            DiagnosticCode::DuplicatePropertyNameError => {
                "property names must be unique so lookups are unambiguous"
            }
            DiagnosticCode::InvalidPropertyNameError => {
                "property names must be identifiers: a letter or `_`, then letters, digits, or `_`"
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
