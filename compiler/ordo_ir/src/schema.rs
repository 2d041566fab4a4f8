//! Type and property schemas.
//!
//! A [`TypeSchema`] is everything the analysis knows about one annotated
//! type: its shape, its declared properties, the bases it inherits
//! properties from, the members that could collide with generated items,
//! and the explicit type argument of the generation request.
//!
//! # Design Decisions
//!
//! - Property order is declaration order; dispatch order follows it
//! - Bases with an unknown property list are opaque and resolved at runtime
//! - Access paths are data, so the synthesizer never re-derives them

use std::fmt;

use crate::{Span, ValueType};

/// Visibility of a property, ordered from least to most visible.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Visible only within the defining module.
    #[default]
    Private,
    /// Visible within a named ancestor module (`pub(super)`, `pub(in path)`).
    Restricted,
    /// Visible within the defining crate (`pub(crate)`).
    Crate,
    /// Visible everywhere.
    Public,
}

impl Visibility {
    /// Parse the spelling used in `#[comparison(visibility = "...")]`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "private" => Some(Visibility::Private),
            "restricted" => Some(Visibility::Restricted),
            "crate" => Some(Visibility::Crate),
            "pub" | "public" => Some(Visibility::Public),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Private => write!(f, "private"),
            Visibility::Restricted => write!(f, "restricted"),
            Visibility::Crate => write!(f, "crate"),
            Visibility::Public => write!(f, "pub"),
        }
    }
}

/// Where a property was declared.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// Declared on the annotated type itself.
    #[default]
    Declared,
    /// Inherited through the named base.
    Inherited { base: String },
}

impl Origin {
    pub fn is_inherited(&self) -> bool {
        matches!(self, Origin::Inherited { .. })
    }
}

/// One step from an instance to a property value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessStep {
    /// Named field: `.name`.
    Field(String),
    /// Tuple field: `.0`.
    Index(u32),
    /// Zero-argument getter called with the current value: `path(value)`.
    Getter(String),
}

/// Path from an instance of the target type to a property value.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessPath(Vec<AccessStep>);

impl AccessPath {
    pub fn field(name: impl Into<String>) -> Self {
        AccessPath(vec![AccessStep::Field(name.into())])
    }

    pub fn index(index: u32) -> Self {
        AccessPath(vec![AccessStep::Index(index)])
    }

    pub fn getter(path: impl Into<String>) -> Self {
        AccessPath(vec![AccessStep::Getter(path.into())])
    }

    /// Prepend the path of a base, so a base property is reached through it.
    #[must_use]
    pub fn through(&self, base: &AccessPath) -> Self {
        let mut steps = base.0.clone();
        steps.extend(self.0.iter().cloned());
        AccessPath(steps)
    }

    pub fn steps(&self) -> &[AccessStep] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A property as declared on a type, before any filtering.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySchema {
    /// Name callers dispatch on.
    pub name: String,
    /// Declared value type, unwrapped from `Option` when nullable.
    pub ty: ValueType,
    /// Whether the declared type was `Option<_>`.
    pub nullable: bool,
    pub visibility: Visibility,
    pub origin: Origin,
    /// Number of parameters beyond the receiver. Only zero is a value accessor.
    pub parameters: usize,
    pub access: AccessPath,
    pub span: Span,
}

impl PropertySchema {
    /// A declared, non-nullable, private field property with zero parameters.
    pub fn field(name: impl Into<String>, ty: ValueType) -> Self {
        let name = name.into();
        PropertySchema {
            access: AccessPath::field(name.clone()),
            name,
            ty,
            nullable: false,
            visibility: Visibility::Private,
            origin: Origin::Declared,
            parameters: 0,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: usize) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub fn with_access(mut self, access: AccessPath) -> Self {
        self.access = access;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A base the target type inherits properties from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseSchema {
    /// Base type as written.
    pub name: String,
    /// Path from the target type to the base value.
    pub access: AccessPath,
    pub span: Span,
    /// Properties of the base, when the host can see them.
    ///
    /// `None` means the base is opaque: its own dispatcher is consulted at
    /// runtime for names the target does not declare.
    pub properties: Option<Vec<PropertySchema>>,
}

impl BaseSchema {
    pub fn opaque(name: impl Into<String>, access: AccessPath) -> Self {
        BaseSchema {
            name: name.into(),
            access,
            span: Span::DUMMY,
            properties: None,
        }
    }

    pub fn known(name: impl Into<String>, access: AccessPath, properties: Vec<PropertySchema>) -> Self {
        BaseSchema {
            name: name.into(),
            access,
            span: Span::DUMMY,
            properties: Some(properties),
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Kind of an existing member of the target type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberKind {
    Field,
    Method { parameters: usize },
}

/// An existing member of the target type, checked for collisions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberSchema {
    pub name: String,
    pub kind: MemberKind,
    pub span: Span,
}

impl MemberSchema {
    pub fn new(name: impl Into<String>, kind: MemberKind, span: Span) -> Self {
        MemberSchema {
            name: name.into(),
            kind,
            span,
        }
    }
}

/// Outcome of resolving an explicit type argument against the host's type system.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgumentStatus {
    Usable,
    Unusable { reason: String },
}

/// Explicit type argument of the generation request.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeArgument {
    /// The argument as written.
    pub text: String,
    pub status: ArgumentStatus,
    pub span: Span,
}

impl TypeArgument {
    pub fn usable(text: impl Into<String>, span: Span) -> Self {
        TypeArgument {
            text: text.into(),
            status: ArgumentStatus::Usable,
            span,
        }
    }

    pub fn unusable(text: impl Into<String>, reason: impl Into<String>, span: Span) -> Self {
        TypeArgument {
            text: text.into(),
            status: ArgumentStatus::Unusable {
                reason: reason.into(),
            },
            span,
        }
    }

    pub fn is_usable(&self) -> bool {
        matches!(self.status, ArgumentStatus::Usable)
    }
}

/// Instance shape of the annotated type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeShape {
    /// A type with instances.
    #[default]
    Struct,
    /// A type with no instances (an uninhabited enum).
    Static,
}

/// Schema of one annotated type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSchema {
    /// The annotated type's name.
    pub name: String,
    pub span: Span,
    pub shape: TypeShape,
    /// Declared properties in declaration order.
    pub properties: Vec<PropertySchema>,
    /// Bases in declaration order.
    pub bases: Vec<BaseSchema>,
    /// Existing members of the type.
    pub members: Vec<MemberSchema>,
    pub type_argument: Option<TypeArgument>,
}

impl TypeSchema {
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        TypeSchema {
            name: name.into(),
            span: Span::DUMMY,
            shape,
            properties: Vec::new(),
            bases: Vec::new(),
            members: Vec::new(),
            type_argument: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertySchema) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: BaseSchema) -> Self {
        self.bases.push(base);
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: MemberSchema) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_type_argument(mut self, argument: TypeArgument) -> Self {
        self.type_argument = Some(argument);
        self
    }

    /// Name of the type generation targets: the explicit argument when
    /// given, the annotated type otherwise.
    pub fn target_name(&self) -> &str {
        self.type_argument
            .as_ref()
            .map_or(self.name.as_str(), |arg| arg.text.as_str())
    }

    pub fn is_static(&self) -> bool {
        self.shape == TypeShape::Static
    }
}
