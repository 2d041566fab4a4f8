//! `#[comparison(...)]` attribute options.
//!
//! Parsed with `darling`; unknown keys and malformed values become compile
//! errors before analysis starts.

use darling::util::{PathList, SpannedValue};
use darling::{FromDeriveInput, FromField, FromMeta};
use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Type-level options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(comparison))]
pub struct TypeOptions {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    /// Concrete type to generate for, e.g. `"Row<u32>"`.
    pub target: Option<syn::LitStr>,
    /// Name of the generated inherent lookup method.
    pub method: Option<SpannedValue<String>>,
    /// Whether to generate the inherent lookup method at all.
    pub inherent: Option<bool>,
    /// Least visibility a field needs to become a property.
    pub visibility: Option<SpannedValue<String>>,
    pub rename_all: Option<SpannedValue<String>>,
    /// Types known to implement `Ord`.
    #[darling(default)]
    pub ordered: PathList,
    /// Types known to implement `PartialOrd`.
    #[darling(default)]
    pub partially_ordered: PathList,
    #[darling(multiple, rename = "getter")]
    pub getters: Vec<GetterOptions>,
}

/// A computed property: `getter(name = "Initials", with = "Self::initials", ty = "String")`.
///
/// `with` names a function taking `&Self` and returning `ty`.
#[derive(Debug, FromMeta)]
pub struct GetterOptions {
    pub name: SpannedValue<String>,
    pub with: syn::Path,
    pub ty: syn::Type,
    #[darling(default)]
    pub ordered: bool,
    #[darling(default)]
    pub partially_ordered: bool,
    #[darling(default)]
    pub text: bool,
}

/// Field-level options.
#[derive(Debug, FromField)]
#[darling(attributes(comparison))]
pub struct FieldOptions {
    pub ident: Option<syn::Ident>,
    pub ty: syn::Type,
    pub vis: syn::Visibility,
    #[darling(default)]
    pub skip: bool,
    pub rename: Option<SpannedValue<String>>,
    /// Consult this field's own dispatcher for names the type lacks.
    #[darling(default)]
    pub base: bool,
    #[darling(default)]
    pub ordered: bool,
    #[darling(default)]
    pub partially_ordered: bool,
    #[darling(default)]
    pub text: bool,
}

/// How a type's field names become property names.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RenameRule {
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PascalCase" => Some(RenameRule::PascalCase),
            "camelCase" => Some(RenameRule::CamelCase),
            "snake_case" => Some(RenameRule::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(RenameRule::ScreamingSnakeCase),
            _ => None,
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            RenameRule::PascalCase => name.to_upper_camel_case(),
            RenameRule::CamelCase => name.to_lower_camel_case(),
            RenameRule::SnakeCase => name.to_snake_case(),
            RenameRule::ScreamingSnakeCase => name.to_shouty_snake_case(),
        }
    }
}

/// A value override requested through `ordered`, `partially_ordered` or
/// `text`. At most one may be given.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ValueOverride {
    Ordered,
    PartiallyOrdered,
    Text,
}

impl ValueOverride {
    pub fn from_flags(ordered: bool, partially_ordered: bool, text: bool) -> Result<Option<Self>, &'static str> {
        match (ordered, partially_ordered, text) {
            (false, false, false) => Ok(None),
            (true, false, false) => Ok(Some(ValueOverride::Ordered)),
            (false, true, false) => Ok(Some(ValueOverride::PartiallyOrdered)),
            (false, false, true) => Ok(Some(ValueOverride::Text)),
            _ => Err("`ordered`, `partially_ordered` and `text` are mutually exclusive"),
        }
    }
}

impl FieldOptions {
    pub fn value_override(&self) -> Result<Option<ValueOverride>, &'static str> {
        ValueOverride::from_flags(self.ordered, self.partially_ordered, self.text)
    }
}

impl GetterOptions {
    pub fn value_override(&self) -> Result<Option<ValueOverride>, &'static str> {
        ValueOverride::from_flags(self.ordered, self.partially_ordered, self.text)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
