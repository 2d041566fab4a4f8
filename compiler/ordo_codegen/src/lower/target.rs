//! Explicit generation targets: `#[comparison(target = "Row<u32>")]`.

use rustc_hash::FxHashMap;
use syn::visit::{self, Visit};
use syn::visit_mut::{self, VisitMut};
use syn::{
    DeriveInput, Expr, ExprPath, GenericArgument, GenericParam, Ident, Lifetime, PathArguments,
    Type,
};

use crate::classify::type_display;

/// Generic parameters of the annotated type mapped to the target's
/// arguments.
#[derive(Debug, Default)]
pub struct Substitution {
    types: FxHashMap<Ident, Type>,
    consts: FxHashMap<Ident, Expr>,
    lifetimes: FxHashMap<Ident, Lifetime>,
}

impl VisitMut for Substitution {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(path) = ty {
            if path.qself.is_none() {
                if let Some(replacement) = path.path.get_ident().and_then(|id| self.types.get(id)) {
                    *ty = replacement.clone();
                    return;
                }
            }
        }
        visit_mut::visit_type_mut(self, ty);
    }

    fn visit_generic_argument_mut(&mut self, argument: &mut GenericArgument) {
        // `N` in `Buf<N>` parses as a type even when it names a const parameter
        if let GenericArgument::Type(Type::Path(path)) = argument {
            if let Some(value) = path.path.get_ident().and_then(|id| self.consts.get(id)) {
                *argument = GenericArgument::Const(value.clone());
                return;
            }
        }
        visit_mut::visit_generic_argument_mut(self, argument);
    }

    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        if let Expr::Path(path) = expr {
            if let Some(value) = path.path.get_ident().and_then(|id| self.consts.get(id)) {
                *expr = value.clone();
                return;
            }
        }
        visit_mut::visit_expr_mut(self, expr);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if let Some(replacement) = self.lifetimes.get(&lifetime.ident) {
            *lifetime = replacement.clone();
        }
    }
}

/// Finds the first type that cannot be named in a target.
#[derive(Default)]
struct Forbidden(Option<&'static str>);

impl<'ast> Visit<'ast> for Forbidden {
    fn visit_type(&mut self, ty: &'ast Type) {
        if self.0.is_some() {
            return;
        }
        match ty {
            Type::Infer(_) => self.0 = Some("the inferred type `_`"),
            Type::ImplTrait(_) => self.0 = Some("an `impl Trait` type"),
            Type::Never(_) => self.0 = Some("the never type `!`"),
            _ => visit::visit_type(self, ty),
        }
    }
}

fn param_name(param: &GenericParam) -> String {
    match param {
        GenericParam::Type(param) => param.ident.to_string(),
        GenericParam::Lifetime(param) => param.lifetime.to_string(),
        GenericParam::Const(param) => format!("const {}", param.ident),
    }
}

/// Check that `text` names a usable instantiation of `input`.
///
/// On success returns the parsed target and the substitution from the
/// item's generic parameters to the target's arguments. On failure
/// returns the reason, for `InvalidTypeArgumentError`.
pub fn resolve_target(text: &str, input: &DeriveInput) -> Result<(Type, Substitution), String> {
    let ident = &input.ident;
    let ty: Type = syn::parse_str(text).map_err(|err| format!("`{text}` is not a type: {err}"))?;

    let mut forbidden = Forbidden::default();
    forbidden.visit_type(&ty);
    if let Some(what) = forbidden.0 {
        return Err(format!("a target cannot contain {what}"));
    }

    let path = match &ty {
        Type::Path(path) if path.qself.is_none() => &path.path,
        _ => return Err(format!("expected a path naming `{ident}`")),
    };
    let Some(last) = path.segments.last() else {
        return Err(format!("expected a path naming `{ident}`"));
    };
    if last.ident != *ident {
        return Err(format!("`{}` does not name `{ident}`", type_display(&ty)));
    }

    let arguments: Vec<&GenericArgument> = match &last.arguments {
        PathArguments::None => Vec::new(),
        PathArguments::AngleBracketed(arguments) => arguments.args.iter().collect(),
        PathArguments::Parenthesized(_) => {
            return Err("parenthesized arguments are only valid for `Fn` traits".to_string());
        }
    };

    let params = &input.generics.params;
    if arguments.len() != params.len() {
        return Err(format!(
            "`{ident}` takes {} generic argument(s) but {} were supplied",
            params.len(),
            arguments.len()
        ));
    }

    let mut substitution = Substitution::default();
    for (param, argument) in params.iter().zip(arguments) {
        match (param, argument) {
            (GenericParam::Type(param), GenericArgument::Type(ty)) => {
                substitution.types.insert(param.ident.clone(), ty.clone());
            }
            (GenericParam::Lifetime(param), GenericArgument::Lifetime(lifetime)) => {
                substitution
                    .lifetimes
                    .insert(param.lifetime.ident.clone(), lifetime.clone());
            }
            (GenericParam::Const(param), GenericArgument::Const(value)) => {
                substitution.consts.insert(param.ident.clone(), value.clone());
            }
            // A bare name in const position parses as a type
            (GenericParam::Const(param), GenericArgument::Type(Type::Path(path)))
                if path.qself.is_none() && path.path.get_ident().is_some() =>
            {
                substitution.consts.insert(
                    param.ident.clone(),
                    Expr::Path(ExprPath {
                        attrs: Vec::new(),
                        qself: None,
                        path: path.path.clone(),
                    }),
                );
            }
            (param, argument) => {
                return Err(format!(
                    "`{}` does not fit the generic parameter `{}`",
                    type_display(argument),
                    param_name(param),
                ));
            }
        }
    }

    Ok((ty, substitution))
}
