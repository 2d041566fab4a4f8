//! Ordo IR - the abstract type schema.
//!
//! This crate describes the shape of a type annotated for per-property
//! comparison without depending on any particular front end:
//! - [`Span`] handles that a host resolves back to its own source locations
//! - [`TypeSchema`] and [`PropertySchema`] for the type and its properties
//! - [`ValueType`] with a small [`ValueKind`] plus ordering [`Capabilities`]
//!
//! The derive macro host populates a schema from a `syn` item. Any other
//! host (a build script, a test) can populate one by hand.
//!
//! All types derive `Clone, Eq, PartialEq, Hash, Debug`.

mod ident;
mod schema;
mod span;
mod value;

pub use ident::is_identifier;
pub use schema::{
    AccessPath, AccessStep, ArgumentStatus, BaseSchema, MemberKind, MemberSchema, Origin,
    PropertySchema, TypeArgument, TypeSchema, TypeShape, Visibility,
};
pub use span::Span;
pub use value::{Capabilities, ValueKind, ValueType};
