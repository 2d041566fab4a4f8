//! Code/Dispatch Synthesizer.
//!
//! Turns a validated [`DispatchPlan`] into the provider impl. Every arm's
//! comparer body is fixed here from the property's strategy; the
//! generated code never inspects types at runtime.

use ordo_analysis::{BaseDelegate, ComparisonStrategy, DispatchPlan, NumericKind, PlannedProperty};
use ordo_ir::{AccessPath, AccessStep};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, quote_spanned};
use syn::{parse_quote, Generics, Ident, Type, WherePredicate};

use crate::lower::{HostItem, SpanTable};

/// Emit the provider impl, and the inherent lookup method when enabled.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %plan.type_name))]
pub fn synthesize(plan: &DispatchPlan, host: &HostItem) -> syn::Result<TokenStream2> {
    let self_ty = self_type(host);
    let generics = impl_generics(plan, host)?;
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let arms = plan
        .properties
        .iter()
        .map(|property| arm(property, &host.spans))
        .collect::<syn::Result<Vec<_>>>()?;
    let fallback = fallback(&plan.delegates)?;
    let hidden = hidden_arms(plan);
    let names = plan.property_names();
    let all_properties = all_properties(plan)?;

    let provider = quote! {
        #[automatically_derived]
        impl #impl_generics ::ordo::PropertyComparisonProvider for #self_ty #where_clause {
            fn get_comparison(
                property: &str,
            ) -> ::core::option::Option<::ordo::Comparer<Self>> {
                match property {
                    #(#arms)*
                    #hidden
                    _ => #fallback,
                }
            }

            fn properties() -> &'static [&'static str] {
                &[#(#names),*]
            }

            #all_properties
        }
    };

    let inherent = host.inherent.then(|| {
        let method = format_ident!("{}", plan.method, span = host.spans.resolve(plan.span));
        quote! {
            #[automatically_derived]
            impl #impl_generics #self_ty #where_clause {
                /// The comparer for `property`, or `None` if there is no
                /// comparable property of that name.
                #[allow(dead_code)]
                pub fn #method(
                    property: &str,
                ) -> ::core::option::Option<::ordo::Comparer<Self>> {
                    <Self as ::ordo::PropertyComparisonProvider>::get_comparison(property)
                }
            }
        }
    });

    tracing::debug!(
        arms = plan.properties.len(),
        delegates = plan.delegates.len(),
        inherent = host.inherent,
        "synthesized dispatcher"
    );

    Ok(quote! {
        #provider
        #inherent
    })
}

/// The type the impl is for.
fn self_type(host: &HostItem) -> TokenStream2 {
    if let Some(target) = &host.target {
        return quote!(#target);
    }
    let ident = &host.ident;
    let (_, ty_generics, _) = host.generics.split_for_impl();
    quote!(#ident #ty_generics)
}

/// Generics and bounds of the impl: none for an explicit target, the
/// item's own otherwise. Either way `Self: 'static`, and every delegate
/// base must itself be a provider.
fn impl_generics(plan: &DispatchPlan, host: &HostItem) -> syn::Result<Generics> {
    let mut generics = if host.target.is_some() {
        Generics::default()
    } else {
        host.generics.clone()
    };
    let where_clause = generics.make_where_clause();
    where_clause.predicates.push(parse_quote!(Self: 'static));
    for delegate in &plan.delegates {
        let base = base_type(delegate)?;
        let predicate: WherePredicate = parse_quote!(#base: ::ordo::PropertyComparisonProvider);
        where_clause.predicates.push(predicate);
    }
    Ok(generics)
}

fn arm(property: &PlannedProperty, spans: &SpanTable) -> syn::Result<TokenStream2> {
    let descriptor = &property.descriptor;
    let span = spans.resolve(descriptor.span);
    let name = &descriptor.name;
    let a = access(&descriptor.access, &format_ident!("a"))?;
    let b = access(&descriptor.access, &format_ident!("b"))?;

    let compare = strategy_body(property.strategy, span);
    let body = if descriptor.nullable {
        quote! {
            ::ordo::compare::nullable(
                ::core::option::Option::as_ref(x),
                ::core::option::Option::as_ref(y),
                |x, y| #compare,
            )
        }
    } else {
        compare
    };

    tracing::trace!(property = %name, strategy = %property.strategy, "arm");

    Ok(quote! {
        #name => ::core::option::Option::Some(::ordo::Comparer::from_fn(
            |a: &Self, b: &Self| {
                let (x, y) = (#a, #b);
                #body
            },
        )),
    })
}

/// Comparison of `x` and `y`, both `&V` for the property's value type `V`.
///
/// Only the function name carries the property's span, so a value type
/// lacking the trait the strategy needs is reported at the property.
fn strategy_body(strategy: ComparisonStrategy, span: proc_macro2::Span) -> TokenStream2 {
    let function = match strategy {
        ComparisonStrategy::Numeric(NumericKind::Integer) => quote_spanned!(span=> integer),
        ComparisonStrategy::Numeric(NumericKind::Float) => quote_spanned!(span=> float),
        ComparisonStrategy::GenericOrdering => quote_spanned!(span=> ordered),
        ComparisonStrategy::OperatorOrdering => quote_spanned!(span=> relational),
        ComparisonStrategy::LocaleText => quote_spanned!(span=> text),
        // Dropped by validation; never planned
        ComparisonStrategy::Unsupported => return quote!(::core::cmp::Ordering::Equal),
    };
    quote!(::ordo::compare::#function(x, y))
}

/// `&receiver.path...` for an access path.
fn access(path: &AccessPath, receiver: &Ident) -> syn::Result<TokenStream2> {
    let mut expr = quote!(#receiver);
    for step in path.steps() {
        expr = match step {
            AccessStep::Field(name) => {
                let member: syn::Member = syn::parse_str(name)?;
                quote!(#expr.#member)
            }
            AccessStep::Index(index) => {
                let member = syn::Member::Unnamed(syn::Index {
                    index: *index,
                    span: proc_macro2::Span::call_site(),
                });
                quote!(#expr.#member)
            }
            AccessStep::Getter(function) => {
                let function: syn::ExprPath = syn::parse_str(function)?;
                quote!(#function(&#expr))
            }
        };
    }
    Ok(quote!(&#expr))
}

fn base_type(delegate: &BaseDelegate) -> syn::Result<Type> {
    syn::parse_str(&delegate.name)
}

/// Unknown names: each delegate base in order, then `None`.
fn fallback(delegates: &[BaseDelegate]) -> syn::Result<TokenStream2> {
    let lookups = delegates
        .iter()
        .map(|delegate| {
            let base = base_type(delegate)?;
            let key = access(&delegate.access, &format_ident!("value"))?;
            Ok(quote! {
                if let ::core::option::Option::Some(comparer) =
                    <#base as ::ordo::PropertyComparisonProvider>::get_comparison(property)
                {
                    return ::core::option::Option::Some(comparer.by_key(|value: &Self| #key));
                }
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(quote! {
        {
            #(#lookups)*
            ::core::option::Option::None
        }
    })
}

/// Names declared here but not comparable. Without delegates the
/// fallback already answers `None` for them.
fn hidden_arms(plan: &DispatchPlan) -> Option<TokenStream2> {
    if plan.delegates.is_empty() || plan.hidden.is_empty() {
        return None;
    }
    let hidden = &plan.hidden;
    Some(quote! {
        #(#hidden)|* => ::core::option::Option::None,
    })
}

/// Override of `all_properties` listing delegated names too.
fn all_properties(plan: &DispatchPlan) -> syn::Result<Option<TokenStream2>> {
    if plan.delegates.is_empty() {
        return Ok(None);
    }
    let bases = plan
        .delegates
        .iter()
        .map(base_type)
        .collect::<syn::Result<Vec<_>>>()?;
    let hidden = &plan.hidden;
    let visible = if hidden.is_empty() {
        quote!(!names.contains(&name))
    } else {
        quote!(!names.contains(&name) && ![#(#hidden),*].contains(&name))
    };
    Ok(Some(quote! {
        fn all_properties() -> ::std::vec::Vec<&'static str> {
            let mut names = <Self as ::ordo::PropertyComparisonProvider>::properties().to_vec();
            #(
                for name in <#bases as ::ordo::PropertyComparisonProvider>::all_properties() {
                    if #visible {
                        names.push(name);
                    }
                }
            )*
            names
        }
    }))
}
