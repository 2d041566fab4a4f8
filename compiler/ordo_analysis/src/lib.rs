//! Analysis passes for comparison generation.
//!
//! # Architecture
//!
//! ```text
//! TypeSchema
//!     └── extract   → TypeDescriptor      (or NotExtractable)
//!         └── select    → ComparisonStrategy per property
//!             └── validate  → DispatchPlan + diagnostics
//! ```
//!
//! [`analyze`] runs all three over one schema. Passes share no state
//! between types, so hosts may analyze many types concurrently.

mod descriptor;
mod extract;
mod pipeline;
mod select;
mod validate;

pub use descriptor::{BaseDelegate, PropertyDescriptor, TypeDescriptor};
pub use extract::{extract, ExtractOptions, NotExtractable};
pub use pipeline::{analyze, Analysis, AnalysisOptions, DEFAULT_METHOD_NAME};
pub use select::{select, select_value, ComparisonStrategy, NumericKind};
pub use validate::{validate, DispatchPlan, PlannedProperty};
