//! Normalized descriptors produced by extraction.
//!
//! Descriptors exist only for the duration of one generation pass and are
//! immutable once built.

use ordo_ir::{AccessPath, Origin, PropertySchema, Span, ValueType, Visibility};

/// A property that survived extraction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: ValueType,
    pub nullable: bool,
    pub visibility: Visibility,
    pub origin: Origin,
    /// Path from an instance of the target to the value.
    pub access: AccessPath,
    pub span: Span,
}

impl PropertyDescriptor {
    pub(crate) fn declared(schema: &PropertySchema) -> Self {
        PropertyDescriptor {
            name: schema.name.clone(),
            ty: schema.ty.clone(),
            nullable: schema.nullable,
            visibility: schema.visibility,
            origin: schema.origin.clone(),
            access: schema.access.clone(),
            span: schema.span,
        }
    }

    pub(crate) fn inherited(schema: &PropertySchema, base: &str, base_access: &AccessPath) -> Self {
        PropertyDescriptor {
            origin: Origin::Inherited {
                base: base.to_string(),
            },
            access: schema.access.through(base_access),
            ..Self::declared(schema)
        }
    }
}

/// An opaque base consulted at runtime for names the target does not declare.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BaseDelegate {
    /// Base type as written.
    pub name: String,
    pub access: AccessPath,
    pub span: Span,
}

/// Normalized view of one annotated type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    /// The annotated type's name.
    pub name: String,
    /// Name of the type generation targets.
    pub target: String,
    pub span: Span,
    /// Declared properties first, then inherited ones, hidden names removed.
    pub properties: Vec<PropertyDescriptor>,
    pub delegates: Vec<BaseDelegate>,
}

impl TypeDescriptor {
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}
