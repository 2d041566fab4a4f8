//! The full analysis of one annotated type.

use ordo_diagnostic::{static_target_type, Diagnostic, DiagnosticQueue, ErrorGuaranteed};
use ordo_ir::{TypeSchema, Visibility};

use crate::{extract, validate, DispatchPlan, ExtractOptions, NotExtractable};

/// Name of the generated lookup method unless configured otherwise.
pub const DEFAULT_METHOD_NAME: &str = "get_comparison";

/// Configuration for one analysis pass.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnalysisOptions {
    pub min_visibility: Visibility,
    /// Name of the generated lookup method, checked for collisions.
    pub method: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            min_visibility: Visibility::Private,
            method: DEFAULT_METHOD_NAME.to_string(),
        }
    }
}

impl AnalysisOptions {
    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            min_visibility: self.min_visibility,
        }
    }
}

/// Result of analyzing one type.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// The plan, or proof that an error explains why there is none.
    pub plan: Result<DispatchPlan, ErrorGuaranteed>,
    /// Every diagnostic raised, in the order raised.
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Extract, select, and validate one schema.
///
/// A static target stops after extraction with exactly one error. Every
/// other problem is collected in full.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %schema.name))]
pub fn analyze(schema: &TypeSchema, options: &AnalysisOptions) -> Analysis {
    let mut queue = DiagnosticQueue::new();

    let plan = match extract(schema, &options.extract_options()) {
        Ok(descriptor) => validate(schema, descriptor, &options.method, &mut queue),
        Err(NotExtractable::Static { type_name, span }) => {
            Err(queue.emit_error(static_target_type(&type_name, span)))
        }
    };

    if let Ok(plan) = &plan {
        tracing::debug!(
            properties = plan.properties.len(),
            delegates = plan.delegates.len(),
            "analysis produced a dispatch plan"
        );
    }

    tracing::debug!(
        errors = queue.error_count(),
        warnings = queue.warning_count(),
        "analysis finished"
    );
    for diagnostic in queue.peek() {
        tracing::trace!(code = %diagnostic.code, message = %diagnostic.message, "raised");
    }

    Analysis {
        plan,
        diagnostics: queue.flush(),
    }
}
