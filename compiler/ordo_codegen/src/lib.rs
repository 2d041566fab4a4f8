//! Code generation behind `#[derive(PropertyComparison)]`.
//!
//! # Architecture
//!
//! ```text
//! DeriveInput
//!     └── lower      → TypeSchema + SpanTable   (attrs, classify)
//!         └── ordo_analysis::analyze → DispatchPlan + diagnostics
//!             ├── synth  → provider impl
//!             └── emit   → compile errors / warnings
//! ```
//!
//! Lives apart from the `proc-macro` crate so every stage can be unit
//! tested on `proc_macro2` tokens.

mod attrs;
mod classify;
mod emit;
mod lower;
mod synth;

pub use attrs::{FieldOptions, GetterOptions, RenameRule, TypeOptions, ValueOverride};
pub use classify::{option_inner, type_display, Classifier};
pub use emit::{message, render};
pub use lower::{lower, resolve_target, HostItem, Lowered, SpanTable, Substitution};
pub use synth::synthesize;

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// Expand `#[derive(PropertyComparison)]` on `input`.
///
/// Always returns tokens: the provider on success, followed by any
/// warnings; only compile errors when the type cannot be generated for.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %input.ident))]
pub fn expand(input: &DeriveInput) -> TokenStream2 {
    let lowered = match lower(input) {
        Ok(lowered) => lowered,
        Err(errors) => return errors.write_errors(),
    };

    let analysis = ordo_analysis::analyze(&lowered.schema, &lowered.options);
    let diagnostics = render(&analysis.diagnostics, &lowered.host.spans);

    let Ok(plan) = &analysis.plan else {
        tracing::debug!(errors = analysis.errors().count(), "generation aborted");
        return diagnostics;
    };

    match synthesize(plan, &lowered.host) {
        Ok(provider) => quote! {
            #provider
            #diagnostics
        },
        Err(error) => {
            let error = error.to_compile_error();
            quote! {
                #error
                #diagnostics
            }
        }
    }
}

#[cfg(test)]
mod tests;
