//! Rendering analysis diagnostics as compiler output.
//!
//! Errors become one combined `compile_error!` set. A derive has no stable
//! way to emit a warning, so warnings use a deprecated constant whose use
//! is spanned at the offending item; the deprecation note carries the
//! diagnostic text.

use ordo_diagnostic::Diagnostic;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};

use crate::lower::SpanTable;

/// Render `diagnostics` in order. Empty when there are none.
pub fn render(diagnostics: &[Diagnostic], spans: &SpanTable) -> TokenStream2 {
    let mut errors: Option<syn::Error> = None;
    let mut warnings = TokenStream2::new();

    for diagnostic in diagnostics {
        let span = diagnostic
            .primary_span()
            .map_or_else(proc_macro2::Span::call_site, |span| spans.resolve(span));
        let text = message(diagnostic);

        if diagnostic.is_error() {
            let error = syn::Error::new(span, text);
            match &mut errors {
                Some(all) => all.combine(error),
                None => errors = Some(error),
            }
        } else {
            warnings.extend(warning(&text, span));
        }
    }

    let errors = errors.map(|errors| errors.to_compile_error());
    quote! {
        #errors
        #warnings
    }
}

/// `[Code] message` followed by notes and help, one per line.
pub fn message(diagnostic: &Diagnostic) -> String {
    let mut text = format!("[{}] {}", diagnostic.code, diagnostic.message);
    for label in diagnostic.labels.iter().filter(|label| !label.is_primary) {
        text.push_str("\n= note: ");
        text.push_str(&label.message);
    }
    for note in &diagnostic.notes {
        text.push_str("\n= note: ");
        text.push_str(note);
    }
    for help in &diagnostic.help {
        text.push_str("\n= help: ");
        text.push_str(help);
    }
    text
}

fn warning(text: &str, span: proc_macro2::Span) -> TokenStream2 {
    quote_spanned! {span=>
        const _: () = {
            #[deprecated(note = #text)]
            #[allow(non_upper_case_globals)]
            const _w: () = ();
            let _ = _w;
        };
    }
}
