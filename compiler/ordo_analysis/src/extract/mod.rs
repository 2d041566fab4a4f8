//! Type Descriptor Extractor.
//!
//! Walks a [`TypeSchema`] and produces a [`TypeDescriptor`]:
//! - declared properties first, in declaration order
//! - then inherited properties, base by base
//! - a name already seen hides any later base property of that name
//! - properties below the minimum visibility, or taking parameters, are left out

use ordo_ir::{Span, TypeSchema, Visibility};
use rustc_hash::FxHashSet;

use crate::{BaseDelegate, PropertyDescriptor, TypeDescriptor};

/// Options controlling which properties extraction keeps.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExtractOptions {
    /// Least visibility a property needs to be considered.
    ///
    /// Defaults to [`Visibility::Private`]: the generated code lives next
    /// to the type, so every property is visible to it.
    pub min_visibility: Visibility,
}

/// Why a schema cannot be turned into a descriptor.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum NotExtractable {
    /// The type has no instances to compare.
    #[error("`{type_name}` is a static type and has no instances")]
    Static { type_name: String, span: Span },
}

/// Extract a descriptor from a schema.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %schema.name))]
pub fn extract(schema: &TypeSchema, options: &ExtractOptions) -> Result<TypeDescriptor, NotExtractable> {
    if schema.is_static() {
        return Err(NotExtractable::Static {
            type_name: schema.name.clone(),
            span: schema.span,
        });
    }

    let mut properties = Vec::with_capacity(schema.properties.len());
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    // Duplicate declared names are kept; validation reports them.
    for prop in &schema.properties {
        if !is_accessor(prop.parameters, prop.visibility, options) {
            tracing::trace!(property = %prop.name, "skipping declared property");
            continue;
        }
        seen.insert(prop.name.as_str());
        properties.push(PropertyDescriptor::declared(prop));
    }

    let mut delegates = Vec::new();
    for base in &schema.bases {
        let Some(base_props) = &base.properties else {
            delegates.push(BaseDelegate {
                name: base.name.clone(),
                access: base.access.clone(),
                span: base.span,
            });
            continue;
        };

        for prop in base_props {
            if !is_accessor(prop.parameters, prop.visibility, options) {
                continue;
            }
            if !seen.insert(prop.name.as_str()) {
                tracing::trace!(property = %prop.name, base = %base.name, "hidden by an earlier declaration");
                continue;
            }
            properties.push(PropertyDescriptor::inherited(prop, &base.name, &base.access));
        }
    }

    Ok(TypeDescriptor {
        name: schema.name.clone(),
        target: schema.target_name().to_string(),
        span: schema.span,
        properties,
        delegates,
    })
}

fn is_accessor(parameters: usize, visibility: Visibility, options: &ExtractOptions) -> bool {
    parameters == 0 && visibility >= options.min_visibility
}
