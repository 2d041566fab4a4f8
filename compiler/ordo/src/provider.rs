use crate::{Comparer, ComparisonError};

/// A type with a generated per-property comparison dispatcher.
///
/// Implemented by `#[derive(PropertyComparison)]`. The derive fixes every
/// property's ordering when the type is compiled; `get_comparison` only
/// matches the name.
pub trait PropertyComparisonProvider: Sized + 'static {
    /// The comparer for `property`, or `None` if the type has no comparable
    /// property of that name.
    fn get_comparison(property: &str) -> Option<Comparer<Self>>;

    /// Names dispatched directly, in declaration order. Names answered by
    /// base delegates are listed by [`all_properties`](Self::all_properties).
    fn properties() -> &'static [&'static str];

    /// Every name `get_comparison` answers, delegated ones included.
    fn all_properties() -> Vec<&'static str> {
        Self::properties().to_vec()
    }

    fn has_property(property: &str) -> bool {
        Self::get_comparison(property).is_some()
    }

    /// Like [`get_comparison`](Self::get_comparison), but a miss is an error.
    fn require_comparison(property: &str) -> Result<Comparer<Self>, ComparisonError> {
        Self::get_comparison(property).ok_or_else(|| ComparisonError::not_found::<Self>(property))
    }
}
