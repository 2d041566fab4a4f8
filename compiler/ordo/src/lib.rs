//! Per-property comparison dispatchers.
//!
//! `#[derive(PropertyComparison)]` analyzes a type at compile time and
//! generates a dispatcher mapping property names to ordering functions,
//! so a caller can sort by a name chosen at runtime (a UI column, a query
//! parameter) without reflection and without a hand-written comparer per
//! property.
//!
//! ```
//! use ordo::{PropertyComparison, PropertyComparisonProvider};
//!
//! #[derive(PropertyComparison)]
//! #[comparison(rename_all = "PascalCase")]
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! let mut people = vec![
//!     Person { name: "Bo".into(), age: 40 },
//!     Person { name: "Al".into(), age: 30 },
//! ];
//! let by_age = Person::get_comparison("Age").ok_or("no such column")?;
//! people.sort_by(by_age.as_fn());
//! assert_eq!(people[0].age, 30);
//! assert!(Person::get_comparison("Height").is_none());
//! # Ok::<(), &'static str>(())
//! ```
//!
//! # Strategies
//!
//! Each property's ordering is fixed at generation time, first match wins:
//!
//! | Value type | Ordering |
//! |------------|----------|
//! | integers | numeric |
//! | `f32`, `f64` | numeric, equal within [`compare::FLOAT_EPSILON`] |
//! | `Ord` types | `Ord::cmp` |
//! | `PartialOrd` types | `<` and `>` |
//! | text | the ambient [`collation`] at call time |
//!
//! `Option<T>` properties order `None` first.
//!
//! # Registry
//!
//! [`ComparisonRegistry`] caches one comparer per (type, property), built on
//! first lookup and shared by every later caller.

pub mod collation;
pub mod compare;
mod comparer;
mod error;
mod provider;
pub mod registry;
mod sort;
mod tracing_setup;

pub use comparer::Comparer;
pub use error::ComparisonError;
pub use ordo_macros::PropertyComparison;
pub use provider::PropertyComparisonProvider;
pub use registry::{get_comparer, require_comparer, ComparisonRegistry};
pub use sort::{sort_by_property, SortDirection};
pub use tracing_setup::init_tracing;
