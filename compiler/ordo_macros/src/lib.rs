//! Procedural macros for ordo.
//!
//! The expansion itself lives in `ordo_codegen`; this crate only crosses
//! the `proc_macro` boundary. Use the derive through the `ordo` crate,
//! whose paths the generated code refers to.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Generate a per-property comparison dispatcher.
///
/// Implements `ordo::PropertyComparisonProvider` and, unless disabled, an
/// inherent `get_comparison(property: &str) -> Option<Comparer<Self>>`.
///
/// # Type-level attributes
///
/// - `#[comparison(target = "Type<Args>")]` generate for one concrete
///   instantiation instead of the generic type
/// - `#[comparison(method = "name")]` name of the inherent method
/// - `#[comparison(inherent = false)]` skip the inherent method
/// - `#[comparison(visibility = "pub" | "crate" | "restricted" | "private")]`
///   least visibility a field needs to be a property
/// - `#[comparison(rename_all = "PascalCase")]` also `camelCase`,
///   `snake_case`, `SCREAMING_SNAKE_CASE`
/// - `#[comparison(ordered(Path, ...))]`, `#[comparison(partially_ordered(Path, ...))]`
///   types known to implement `Ord` / `PartialOrd`
/// - `#[comparison(getter(name = "Name", with = "path", ty = "Type"))]`
///   a computed property; repeatable
///
/// # Field-level attributes
///
/// - `skip`, `rename = "Name"`
/// - `base` consult the field's own dispatcher for names this type lacks
/// - `ordered`, `partially_ordered`, `text` override classification
#[proc_macro_derive(PropertyComparison, attributes(comparison))]
pub fn derive_property_comparison(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ordo_codegen::expand(&input).into()
}
