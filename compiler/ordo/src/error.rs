//! Runtime lookup errors.

use thiserror::Error;

/// A failed lookup through one of the `require_*` APIs.
///
/// Plain lookups report a miss as `None`; this is the opt-in for callers
/// that treat an unknown name as a failure.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ComparisonError {
    #[error("type `{type_name}` has no comparable property `{property}`")]
    PropertyNotFound {
        type_name: &'static str,
        property: String,
    },
}

impl ComparisonError {
    pub(crate) fn not_found<T: ?Sized>(property: &str) -> Self {
        ComparisonError::PropertyNotFound {
            type_name: std::any::type_name::<T>(),
            property: property.to_string(),
        }
    }
}
