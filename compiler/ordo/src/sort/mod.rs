//! Sorting collections by a property chosen at runtime.

use std::fmt;

use crate::{ComparisonError, PropertyComparisonProvider};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Stable sort of `items` by `property`, through the global registry.
///
/// `items` is left untouched when the property does not exist.
#[tracing::instrument(level = "trace", skip(items), fields(len = items.len()))]
pub fn sort_by_property<T: PropertyComparisonProvider>(
    items: &mut [T],
    property: &str,
    direction: SortDirection,
) -> Result<(), ComparisonError> {
    let comparer = crate::require_comparer::<T>(property)?;
    match direction {
        SortDirection::Ascending => items.sort_by(|a, b| comparer.compare(a, b)),
        SortDirection::Descending => items.sort_by(|a, b| comparer.compare(b, a)),
    }
    Ok(())
}
