//! Validator / Diagnostic Emitter.
//!
//! Checks a descriptor against the rules for generation. Every rule runs;
//! the queue ends up with the full set of problems for the type. Any error
//! aborts generation (no partial dispatcher); the zero-property warning
//! does not.

use ordo_diagnostic::{
    duplicate_property_name, invalid_property_name, invalid_type_argument, method_collision,
    no_comparable_property, DiagnosticQueue, ErrorGuaranteed,
};
use ordo_ir::{is_identifier, ArgumentStatus, Span, TypeSchema};
use rustc_hash::FxHashMap;

use crate::{select, BaseDelegate, ComparisonStrategy, PropertyDescriptor, TypeDescriptor};

/// A property paired with the strategy its comparer implements.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PlannedProperty {
    pub descriptor: PropertyDescriptor,
    pub strategy: ComparisonStrategy,
}

/// Validated input to the synthesizer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DispatchPlan {
    pub type_name: String,
    pub target: String,
    pub span: Span,
    /// Name of the generated lookup method.
    pub method: String,
    /// Dispatch arms, in descriptor order, `Unsupported` properties removed.
    pub properties: Vec<PlannedProperty>,
    /// Declared names dropped as `Unsupported`. They still hide the same
    /// name on every delegate base.
    pub hidden: Vec<String>,
    pub delegates: Vec<BaseDelegate>,
}

impl DispatchPlan {
    pub fn property(&self, name: &str) -> Option<&PlannedProperty> {
        self.properties.iter().find(|p| p.descriptor.name == name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.descriptor.name.as_str())
    }

    /// Whether every lookup on the generated dispatcher reports "not found".
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.delegates.is_empty()
    }
}

/// Validate a descriptor and build the dispatch plan.
///
/// `schema` supplies what the descriptor no longer carries: the explicit
/// type argument and the existing members.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %descriptor.name))]
pub fn validate(
    schema: &TypeSchema,
    descriptor: TypeDescriptor,
    method: &str,
    queue: &mut DiagnosticQueue,
) -> Result<DispatchPlan, ErrorGuaranteed> {
    check_type_argument(schema, queue);
    check_member_collisions(schema, method, queue);
    check_property_names(&descriptor, queue);

    let mut properties = Vec::with_capacity(descriptor.properties.len());
    let mut hidden = Vec::new();
    for prop in descriptor.properties {
        let strategy = select(&prop);
        if strategy.is_supported() {
            properties.push(PlannedProperty {
                descriptor: prop,
                strategy,
            });
        } else {
            tracing::debug!(property = %prop.name, ty = %prop.ty, "dropping unsupported property");
            hidden.push(prop.name);
        }
    }

    if properties.is_empty() && descriptor.delegates.is_empty() {
        queue.push(no_comparable_property(&descriptor.name, descriptor.span));
    }

    if let Some(guarantee) = queue.has_errors() {
        return Err(guarantee);
    }

    Ok(DispatchPlan {
        type_name: descriptor.name,
        target: descriptor.target,
        span: descriptor.span,
        method: method.to_string(),
        properties,
        hidden,
        delegates: descriptor.delegates,
    })
}

fn check_type_argument(schema: &TypeSchema, queue: &mut DiagnosticQueue) {
    let Some(argument) = &schema.type_argument else {
        return;
    };
    if let ArgumentStatus::Unusable { reason } = &argument.status {
        queue.emit_error(invalid_type_argument(
            &schema.name,
            &argument.text,
            reason,
            argument.span,
        ));
    }
}

fn check_member_collisions(schema: &TypeSchema, method: &str, queue: &mut DiagnosticQueue) {
    for member in schema.members.iter().filter(|m| m.name == method) {
        queue.emit_error(method_collision(
            &schema.name,
            method,
            member.span,
            schema.span,
        ));
    }
}

fn check_property_names(descriptor: &TypeDescriptor, queue: &mut DiagnosticQueue) {
    let mut first_seen: FxHashMap<&str, Span> = FxHashMap::default();
    for prop in &descriptor.properties {
        if !is_identifier(&prop.name) {
            queue.emit_error(invalid_property_name(&descriptor.name, &prop.name, prop.span));
            continue;
        }
        if let Some(&first) = first_seen.get(prop.name.as_str()) {
            queue.emit_error(duplicate_property_name(
                &descriptor.name,
                &prop.name,
                first,
                prop.span,
            ));
        } else {
            first_seen.insert(prop.name.as_str(), prop.span);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
