//! Lowering a `syn` item into the host-independent [`TypeSchema`].
//!
//! Analysis only sees names and classifications. Everything it later needs
//! to point at the user's source is kept here, in a [`SpanTable`] indexed
//! by the schema's spans.

mod target;

use std::fmt;

use darling::{FromDeriveInput, FromField};
use ordo_analysis::{AnalysisOptions, DEFAULT_METHOD_NAME};
use ordo_ir::{
    is_identifier, AccessPath, BaseSchema, MemberKind, MemberSchema, PropertySchema, Span,
    TypeArgument, TypeSchema, TypeShape, Visibility,
};
use syn::ext::IdentExt;
use syn::visit_mut::VisitMut;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Generics, Ident, Type};

use crate::attrs::{FieldOptions, GetterOptions, RenameRule, TypeOptions};
use crate::classify::{type_display, Classifier};

pub use target::{resolve_target, Substitution};

/// Source locations behind schema [`Span`]s.
#[derive(Debug, Default)]
pub struct SpanTable(Vec<proc_macro2::Span>);

impl SpanTable {
    pub fn intern(&mut self, span: proc_macro2::Span) -> Span {
        let Ok(index) = u32::try_from(self.0.len()) else {
            return Span::DUMMY;
        };
        self.0.push(span);
        Span::new(index)
    }

    /// The source span, or the macro call site for dummy spans.
    pub fn resolve(&self, span: Span) -> proc_macro2::Span {
        if span.is_dummy() {
            return proc_macro2::Span::call_site();
        }
        self.0
            .get(span.index())
            .copied()
            .unwrap_or_else(proc_macro2::Span::call_site)
    }
}

/// Host-side facts synthesis needs beyond the dispatch plan.
#[derive(Debug)]
pub struct HostItem {
    pub ident: Ident,
    pub generics: Generics,
    /// The concrete type to implement for, when a usable explicit target
    /// was given. `None` implements for the annotated type and its generics.
    pub target: Option<Type>,
    /// Whether to emit the inherent lookup method.
    pub inherent: bool,
    pub spans: SpanTable,
}

/// One lowered item.
#[derive(Debug)]
pub struct Lowered {
    pub schema: TypeSchema,
    pub options: AnalysisOptions,
    pub host: HostItem,
}

/// Lower `input`. Attribute misuse is reported here, all of it at once.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %input.ident))]
pub fn lower(input: &DeriveInput) -> darling::Result<Lowered> {
    let options = TypeOptions::from_derive_input(input)?;
    let mut errors = darling::Error::accumulator();
    let mut spans = SpanTable::default();

    let type_span = spans.intern(input.ident.span());
    let name = input.ident.to_string();

    let method = match &options.method {
        Some(method) if !is_identifier(method) => {
            errors.push(error_at(
                method.span(),
                format!("`{}` is not a valid method name", **method),
            ));
            DEFAULT_METHOD_NAME.to_string()
        }
        Some(method) => (**method).clone(),
        None => DEFAULT_METHOD_NAME.to_string(),
    };

    let min_visibility = match &options.visibility {
        Some(keyword) => Visibility::from_keyword(keyword).unwrap_or_else(|| {
            errors.push(error_at(
                keyword.span(),
                format!(
                    "unknown visibility `{}`, expected `pub`, `crate`, `restricted` or `private`",
                    **keyword
                ),
            ));
            Visibility::Private
        }),
        None => Visibility::Private,
    };

    let rename_rule = options.rename_all.as_ref().and_then(|rule| {
        let parsed = RenameRule::from_name(rule);
        if parsed.is_none() {
            errors.push(error_at(
                rule.span(),
                format!(
                    "unknown rename rule `{}`, expected `PascalCase`, `camelCase`, `snake_case` or `SCREAMING_SNAKE_CASE`",
                    **rule
                ),
            ));
        }
        parsed
    });

    // Resolve the explicit target first: it decides which generics are in scope
    let mut host_target = None;
    let mut substitution = None;
    let type_argument = options.target.as_ref().map(|literal| {
        let span = spans.intern(literal.span());
        match resolve_target(&literal.value(), input) {
            Ok((ty, subst)) => {
                let text = type_display(&ty);
                host_target = Some(ty);
                substitution = Some(subst);
                TypeArgument::usable(text, span)
            }
            Err(reason) => TypeArgument::unusable(literal.value(), reason, span),
        }
    });

    let classifier = Classifier::new(&options.ordered, &options.partially_ordered);
    let classifier = match &substitution {
        Some(_) => classifier,
        None => classifier.with_generics(&input.generics),
    };

    let shape = match &input.data {
        Data::Enum(data) if data.variants.is_empty() => TypeShape::Static,
        _ => TypeShape::Struct,
    };
    let mut schema = TypeSchema::new(&name, shape).with_span(type_span);
    if let Some(argument) = type_argument {
        schema = schema.with_type_argument(argument);
    }

    let mut lowerer = FieldLowerer {
        classifier: &classifier,
        substitution: substitution.as_mut(),
        rename_rule,
        spans: &mut spans,
        errors: &mut errors,
    };

    match &input.data {
        Data::Struct(data) => {
            for (index, field) in data.fields.iter().enumerate() {
                lowerer.field(index, field, &mut schema);
            }
        }
        Data::Enum(_) | Data::Union(_) => {
            tracing::debug!("no common properties on enums and unions");
        }
    }

    for getter in &options.getters {
        lowerer.getter(getter, &mut schema);
    }

    errors.finish()?;

    tracing::debug!(
        properties = schema.properties.len(),
        bases = schema.bases.len(),
        members = schema.members.len(),
        "lowered"
    );

    Ok(Lowered {
        schema,
        options: AnalysisOptions {
            min_visibility,
            method,
        },
        host: HostItem {
            ident: input.ident.clone(),
            generics: input.generics.clone(),
            target: host_target,
            inherent: options.inherent.unwrap_or(true),
            spans,
        },
    })
}

struct FieldLowerer<'a> {
    classifier: &'a Classifier,
    substitution: Option<&'a mut Substitution>,
    rename_rule: Option<RenameRule>,
    spans: &'a mut SpanTable,
    errors: &'a mut darling::error::Accumulator,
}

impl FieldLowerer<'_> {
    fn field(&mut self, index: usize, field: &syn::Field, schema: &mut TypeSchema) {
        let Some(options) = self.errors.handle(FieldOptions::from_field(field)) else {
            return;
        };

        if let Some(ident) = &options.ident {
            let span = self.spans.intern(ident.span());
            schema
                .members
                .push(MemberSchema::new(ident.unraw().to_string(), MemberKind::Field, span));
        }
        if options.skip {
            return;
        }

        let access = match (&options.ident, u32::try_from(index)) {
            (Some(ident), _) => AccessPath::field(ident.to_string()),
            (None, Ok(index)) => AccessPath::index(index),
            (None, Err(_)) => return,
        };
        let ty = self.substitute(&options.ty);

        if options.base {
            self.check_base(&options);
            let span = self.spans.intern(field_span(field));
            schema
                .bases
                .push(BaseSchema::opaque(type_display(&ty), access).with_span(span));
            return;
        }

        let value_override = match options.value_override() {
            Ok(value_override) => value_override,
            Err(message) => {
                self.errors.push(error_at(field.span(), message));
                return;
            }
        };

        let (name, span) = match (&options.rename, &options.ident) {
            (Some(rename), _) => ((**rename).clone(), rename.span()),
            (None, Some(ident)) => {
                let raw = ident.unraw().to_string();
                let name = self.rename_rule.map_or(raw.clone(), |rule| rule.apply(&raw));
                (name, ident.span())
            }
            // Tuple fields are only properties when named
            (None, None) => return,
        };

        let (value, nullable) = self.classifier.classify_property(&ty, value_override);
        let mut property = PropertySchema::field(name, value)
            .with_access(access)
            .with_visibility(visibility(&field.vis))
            .with_span(self.spans.intern(span));
        if nullable {
            property = property.nullable();
        }
        schema.properties.push(property);
    }

    fn getter(&mut self, getter: &GetterOptions, schema: &mut TypeSchema) {
        let value_override = match getter.value_override() {
            Ok(value_override) => value_override,
            Err(message) => {
                self.errors.push(error_at(getter.name.span(), message));
                return;
            }
        };
        let span = self.spans.intern(getter.name.span());

        if let Some(method) = self_method(&getter.with) {
            schema.members.push(MemberSchema::new(
                method,
                MemberKind::Method { parameters: 0 },
                span,
            ));
        }

        let ty = self.substitute(&getter.ty);
        let (value, nullable) = self.classifier.classify_property(&ty, value_override);
        let mut property = PropertySchema::field(getter.name.as_str(), value)
            .with_access(AccessPath::getter(type_display(&getter.with)))
            .with_visibility(Visibility::Public)
            .with_span(span);
        if nullable {
            property = property.nullable();
        }
        schema.properties.push(property);
    }

    fn check_base(&mut self, options: &FieldOptions) {
        let conflicting = [
            ("rename", options.rename.is_some()),
            ("ordered", options.ordered),
            ("partially_ordered", options.partially_ordered),
            ("text", options.text),
        ];
        for (key, set) in conflicting {
            if set {
                self.errors.push(error_at(
                    options.ty.span(),
                    format!("`{key}` cannot be combined with `base`"),
                ));
            }
        }
    }

    fn substitute(&mut self, ty: &Type) -> Type {
        let mut ty = ty.clone();
        if let Some(substitution) = self.substitution.as_deref_mut() {
            substitution.visit_type_mut(&mut ty);
        }
        ty
    }
}

fn field_span(field: &syn::Field) -> proc_macro2::Span {
    field
        .ident
        .as_ref()
        .map_or_else(|| field.ty.span(), Ident::span)
}

/// `name` when `path` is `Self::name`.
fn self_method(path: &syn::Path) -> Option<String> {
    let mut segments = path.segments.iter();
    let first = segments.next()?;
    let second = segments.next()?;
    if first.ident == "Self" && segments.next().is_none() {
        Some(second.ident.unraw().to_string())
    } else {
        None
    }
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(restricted) if restricted.path.is_ident("crate") => {
            Visibility::Crate
        }
        syn::Visibility::Restricted(restricted) if restricted.path.is_ident("self") => {
            Visibility::Private
        }
        syn::Visibility::Restricted(_) => Visibility::Restricted,
        syn::Visibility::Inherited => Visibility::Private,
    }
}

fn error_at(span: proc_macro2::Span, message: impl fmt::Display) -> darling::Error {
    syn::Error::new(span, message).into()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
