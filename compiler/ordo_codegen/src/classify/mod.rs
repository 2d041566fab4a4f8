//! Mapping `syn` types onto value kinds and ordering capabilities.
//!
//! The derive cannot ask the compiler which traits a type implements, so
//! classification is by name: primitives and well-known standard types,
//! generic parameters by their bounds, and whatever the user lists in
//! `ordered(...)` / `partially_ordered(...)`.

use ordo_ir::{Capabilities, ValueKind, ValueType};
use quote::ToTokens;
use rustc_hash::FxHashMap;
use syn::{GenericArgument, Generics, Path, PathArguments, Type, TypeParamBound, WherePredicate};

use crate::attrs::ValueOverride;

const INTEGERS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

const FLOATS: &[&str] = &["f32", "f64"];

/// Standard types implementing `Ord`.
const STD_ORDERED: &[&str] = &[
    "bool",
    "char",
    "Duration",
    "Instant",
    "SystemTime",
    "Ordering",
    "IpAddr",
    "Ipv4Addr",
    "Ipv6Addr",
    "SocketAddr",
    "SocketAddrV4",
    "SocketAddrV6",
    "PathBuf",
    "Path",
    "OsString",
    "OsStr",
    "CString",
    "CStr",
    "TypeId",
];

/// Wrappers whose ordering is the inner type's.
const TRANSPARENT: &[&str] = &["Box", "Rc", "Arc", "Reverse", "Wrapping", "Saturating"];

/// Wrappers that text reads through.
const TEXT_POINTERS: &[&str] = &["Box", "Rc", "Arc"];

/// Collections ordered lexicographically by their elements.
const COLLECTIONS: &[&str] = &[
    "Vec",
    "VecDeque",
    "LinkedList",
    "BTreeSet",
    "BTreeMap",
    "Option",
    "Result",
];

/// Render a type the way a user would write it.
pub fn type_display(ty: &impl ToTokens) -> String {
    let mut text = ty.to_token_stream().to_string();
    for (from, to) in [
        (" < ", "<"),
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" :: ", "::"),
        (":: ", "::"),
        (" ,", ","),
        ("& ", "&"),
        ("[ ", "["),
        (" ]", "]"),
        (" ;", ";"),
        ("( ", "("),
        (" )", ")"),
    ] {
        text = text.replace(from, to);
    }
    text
}

/// Capability lookup for one annotated type.
#[derive(Debug, Default)]
pub struct Classifier {
    /// Generic type parameters in scope, with capabilities from their bounds.
    params: FxHashMap<String, Capabilities>,
    ordered: Vec<Path>,
    partially_ordered: Vec<Path>,
}

impl Classifier {
    pub fn new(ordered: &[Path], partially_ordered: &[Path]) -> Self {
        Classifier {
            params: FxHashMap::default(),
            ordered: ordered.to_vec(),
            partially_ordered: partially_ordered.to_vec(),
        }
    }

    /// Bring `generics`' type parameters into scope.
    #[must_use]
    pub fn with_generics(mut self, generics: &Generics) -> Self {
        for param in generics.type_params() {
            let caps = bounds_capabilities(param.bounds.iter());
            *self.params.entry(param.ident.to_string()).or_default() |= caps;
        }
        if let Some(where_clause) = &generics.where_clause {
            for predicate in &where_clause.predicates {
                let WherePredicate::Type(predicate) = predicate else {
                    continue;
                };
                let Some(ident) = single_ident(&predicate.bounded_ty) else {
                    continue;
                };
                if let Some(caps) = self.params.get_mut(&ident) {
                    *caps |= bounds_capabilities(predicate.bounds.iter());
                }
            }
        }
        self
    }

    /// Classify a property's declared type. `Option<T>` is nullable and
    /// classified as `T`; an override replaces the classification.
    pub fn classify_property(&self, ty: &Type, value_override: Option<ValueOverride>) -> (ValueType, bool) {
        let (inner, nullable) = match option_inner(ty) {
            Some(inner) => (inner, true),
            None => (ty, false),
        };
        let display = type_display(inner);
        let value = match value_override {
            Some(ValueOverride::Ordered) => ValueType::ordered(display),
            Some(ValueOverride::PartiallyOrdered) => ValueType::partially_ordered(display),
            Some(ValueOverride::Text) => ValueType::text(display),
            None => self.classify(inner),
        };
        tracing::trace!(ty = %value.display, kind = ?value.kind, caps = ?value.capabilities, nullable, "classified");
        (value, nullable)
    }

    /// Classify a type as a property value.
    pub fn classify(&self, ty: &Type) -> ValueType {
        let display = type_display(ty);
        match self.kind(ty) {
            ValueKind::Integer => ValueType::integer(display),
            ValueKind::Float => ValueType::float(display),
            ValueKind::Text => ValueType::text(display),
            ValueKind::Other => ValueType::new(display, ValueKind::Other, self.capabilities(ty)),
        }
    }

    fn kind(&self, ty: &Type) -> ValueKind {
        match ty {
            Type::Paren(inner) => self.kind(&inner.elem),
            Type::Group(inner) => self.kind(&inner.elem),
            Type::Reference(reference) => match self.kind(&reference.elem) {
                ValueKind::Text => ValueKind::Text,
                _ => ValueKind::Other,
            },
            Type::Path(path) if path.qself.is_none() => {
                let Some(last) = path.path.segments.last() else {
                    return ValueKind::Other;
                };
                let name = last.ident.to_string();
                if path.path.segments.len() == 1 && self.params.contains_key(&name) {
                    return ValueKind::Other;
                }
                if INTEGERS.contains(&name.as_str()) {
                    ValueKind::Integer
                } else if FLOATS.contains(&name.as_str()) {
                    ValueKind::Float
                } else if name == "String" || name == "str" {
                    ValueKind::Text
                } else if name == "Cow" || TEXT_POINTERS.contains(&name.as_str()) {
                    match first_type_argument(&last.arguments) {
                        Some(inner) if self.kind(inner) == ValueKind::Text => ValueKind::Text,
                        _ => ValueKind::Other,
                    }
                } else {
                    ValueKind::Other
                }
            }
            _ => ValueKind::Other,
        }
    }

    /// The traits `ty` implements, as far as can be told by name.
    ///
    /// Unlike [`classify`](Self::classify) this reports text as ordered:
    /// inside a composite, text contributes to the composite's own `Ord`.
    pub fn capabilities(&self, ty: &Type) -> Capabilities {
        match ty {
            Type::Paren(inner) => self.capabilities(&inner.elem),
            Type::Group(inner) => self.capabilities(&inner.elem),
            Type::Reference(reference) => self.capabilities(&reference.elem),
            Type::Tuple(tuple) => tuple
                .elems
                .iter()
                .fold(Capabilities::ORDERED, |caps, elem| caps & self.capabilities(elem)),
            Type::Array(array) => self.capabilities(&array.elem),
            Type::Slice(slice) => self.capabilities(&slice.elem),
            Type::Path(path) if path.qself.is_none() => self.path_capabilities(&path.path),
            _ => Capabilities::empty(),
        }
    }

    fn path_capabilities(&self, path: &Path) -> Capabilities {
        let Some(last) = path.segments.last() else {
            return Capabilities::empty();
        };
        let name = last.ident.to_string();
        let name = name.as_str();

        if path.segments.len() == 1 {
            if let Some(&caps) = self.params.get(name) {
                return caps;
            }
        }
        if listed(&self.ordered, path) {
            return Capabilities::ORDERED;
        }
        if listed(&self.partially_ordered, path) {
            return Capabilities::RELATIONAL;
        }

        if INTEGERS.contains(&name) || STD_ORDERED.contains(&name) || name.starts_with("NonZero") {
            return Capabilities::ORDERED;
        }
        if FLOATS.contains(&name) {
            return Capabilities::RELATIONAL;
        }
        if name == "String" || name == "str" || name == "Cow" {
            return Capabilities::ORDERED;
        }
        if TRANSPARENT.contains(&name) || COLLECTIONS.contains(&name) {
            return self.arguments_capabilities(&last.arguments);
        }
        Capabilities::empty()
    }

    fn arguments_capabilities(&self, arguments: &PathArguments) -> Capabilities {
        let PathArguments::AngleBracketed(arguments) = arguments else {
            return Capabilities::empty();
        };
        let mut types = arguments.args.iter().filter_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        });
        let Some(first) = types.next() else {
            return Capabilities::empty();
        };
        types.fold(self.capabilities(first), |caps, ty| caps & self.capabilities(ty))
    }
}

/// Whether `path` names a type in `list`. Entries match on the full path or
/// on the last segment, ignoring generic arguments.
fn listed(list: &[Path], path: &Path) -> bool {
    let display = type_display(path);
    let last = path.segments.last().map(|s| &s.ident);
    list.iter().any(|entry| {
        type_display(entry) == display || entry.segments.last().map(|s| &s.ident) == last
    })
}

fn bounds_capabilities<'a>(bounds: impl Iterator<Item = &'a TypeParamBound>) -> Capabilities {
    let mut caps = Capabilities::empty();
    for bound in bounds {
        let TypeParamBound::Trait(bound) = bound else {
            continue;
        };
        match bound.path.segments.last().map(|s| s.ident.to_string()).as_deref() {
            Some("Ord") => caps |= Capabilities::ORDERED,
            Some("PartialOrd") => caps |= Capabilities::RELATIONAL,
            _ => {}
        }
    }
    caps
}

fn single_ident(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.get_ident().map(ToString::to_string),
        _ => None,
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(arguments) = arguments else {
        return None;
    };
    arguments.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// `T` when `ty` is `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let last = path.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    first_type_argument(&last.arguments)
}
