//! Diagnostics for comparison generation.
//!
//! Every generation-time problem is a [`Diagnostic`] with:
//! - A stable [`DiagnosticCode`] the host toolchain can match on
//! - A message rendered from the code's fixed template
//! - A primary label pointing at the offending item
//! - Notes and help lines where they make the fix obvious
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is proof that at least one error diagnostic was
//! queued. Analysis returns it when it aborts generation for a type, so an
//! aborted type can never go unreported.
//!
//! ```text
//! let guarantee = queue.emit_error(static_target_type("Never", span));
//! return Err(guarantee);
//! ```

mod code;
mod diagnostic;
mod guarantee;
pub mod queue;

pub use code::DiagnosticCode;
pub use diagnostic::{
    duplicate_property_name, invalid_property_name, invalid_type_argument, method_collision,
    no_comparable_property, static_target_type, Diagnostic, Label, Severity,
};
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
