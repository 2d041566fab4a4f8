//! Strategy Selector.
//!
//! A pure decision function from a property's value type to the ordering
//! semantics its comparer will use. Precedence, first match wins:
//!
//! ```text
//! Numeric → GenericOrdering → OperatorOrdering → LocaleText → Unsupported
//! ```
//!
//! Numeric comes first so primitives never go through operator impls.
//! Explicit ordering contracts beat operators; text is last because its
//! order depends on the collator active at call time.

use std::fmt;

use ordo_ir::{Capabilities, ValueKind, ValueType};

use crate::PropertyDescriptor;

/// Numeric family of a `Numeric` strategy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumericKind {
    /// Exact ordering.
    Integer,
    /// Epsilon-tolerant equality, then the sign of the difference.
    Float,
}

/// Ordering semantics chosen for one property.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComparisonStrategy {
    Numeric(NumericKind),
    /// Delegates to the type's `Ord` implementation.
    GenericOrdering,
    /// Delegates to the type's `<` and `>` operators.
    OperatorOrdering,
    /// Collates text with the ambient collator at call time.
    LocaleText,
    Unsupported,
}

impl ComparisonStrategy {
    pub fn is_supported(self) -> bool {
        !matches!(self, ComparisonStrategy::Unsupported)
    }

    pub fn name(self) -> &'static str {
        match self {
            ComparisonStrategy::Numeric(NumericKind::Integer) => "numeric (integer)",
            ComparisonStrategy::Numeric(NumericKind::Float) => "numeric (float)",
            ComparisonStrategy::GenericOrdering => "generic ordering",
            ComparisonStrategy::OperatorOrdering => "operator ordering",
            ComparisonStrategy::LocaleText => "locale text",
            ComparisonStrategy::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ComparisonStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Select the strategy for a property.
///
/// Nullability does not take part: the decision is made on the unwrapped
/// type, and the synthesizer orders `None` first around it.
pub fn select(property: &PropertyDescriptor) -> ComparisonStrategy {
    let strategy = select_value(&property.ty);
    tracing::trace!(property = %property.name, ty = %property.ty, %strategy, "selected strategy");
    strategy
}

/// Select the strategy for a bare value type.
pub fn select_value(ty: &ValueType) -> ComparisonStrategy {
    if ty.is_numeric() {
        let kind = if ty.kind == ValueKind::Float {
            NumericKind::Float
        } else {
            NumericKind::Integer
        };
        return ComparisonStrategy::Numeric(kind);
    }

    if ty.capabilities.contains(Capabilities::TOTAL_ORDER) {
        ComparisonStrategy::GenericOrdering
    } else if ty.capabilities.contains(Capabilities::RELATIONAL) {
        ComparisonStrategy::OperatorOrdering
    } else if ty.is_textual() {
        ComparisonStrategy::LocaleText
    } else {
        ComparisonStrategy::Unsupported
    }
}
