use darling::{FromDeriveInput, FromField};
use pretty_assertions::assert_eq;
use syn::{parse_quote, Data, DeriveInput, Fields};

use super::*;

fn first_field(input: &DeriveInput) -> &syn::Field {
    let Data::Struct(data) = &input.data else {
        panic!("expected a struct");
    };
    let Fields::Named(fields) = &data.fields else {
        panic!("expected named fields");
    };
    fields.named.first().unwrap()
}

#[test]
fn type_options_default_when_absent() {
    let input: DeriveInput = parse_quote! {
        struct Person { age: i32 }
    };
    let options = TypeOptions::from_derive_input(&input).unwrap();
    assert_eq!(options.ident, "Person");
    assert!(options.target.is_none());
    assert!(options.method.is_none());
    assert!(options.inherent.is_none());
    assert!(options.ordered.is_empty());
    assert!(options.getters.is_empty());
}

#[test]
fn type_options_parse_every_key() {
    let input: DeriveInput = parse_quote! {
        #[comparison(
            target = "Row<u32>",
            method = "comparison_for",
            inherent = false,
            visibility = "pub",
            rename_all = "PascalCase",
            ordered(Version, semver::Version),
            partially_ordered(Score),
            getter(name = "Initials", with = "Self::initials", ty = "String"),
            getter(name = "Rank", with = "rank_of", ty = "u8", ordered)
        )]
        struct Row<T> { value: T }
    };
    let options = TypeOptions::from_derive_input(&input).unwrap();
    assert_eq!(options.target.unwrap().value(), "Row<u32>");
    assert_eq!(options.method.as_deref().map(String::as_str), Some("comparison_for"));
    assert_eq!(options.inherent, Some(false));
    assert_eq!(options.visibility.as_deref().map(String::as_str), Some("pub"));
    assert_eq!(options.ordered.len(), 2);
    assert_eq!(options.partially_ordered.len(), 1);
    assert_eq!(options.getters.len(), 2);
    assert_eq!(options.getters[0].name.as_str(), "Initials");
    assert!(options.getters[1].ordered);
    assert_eq!(
        options.getters[1].value_override(),
        Ok(Some(ValueOverride::Ordered))
    );
}

#[test]
fn unknown_type_key_is_rejected() {
    let input: DeriveInput = parse_quote! {
        #[comparison(sort_order = "asc")]
        struct Person { age: i32 }
    };
    assert!(TypeOptions::from_derive_input(&input).is_err());
}

#[test]
fn field_options_parse_flags() {
    let input: DeriveInput = parse_quote! {
        struct Person {
            #[comparison(rename = "Years", ordered)]
            pub age: i32,
        }
    };
    let options = FieldOptions::from_field(first_field(&input)).unwrap();
    assert_eq!(options.ident.as_ref().unwrap(), "age");
    assert_eq!(options.rename.as_deref().map(String::as_str), Some("Years"));
    assert!(!options.skip);
    assert!(!options.base);
    assert_eq!(options.value_override(), Ok(Some(ValueOverride::Ordered)));
}

#[test]
fn conflicting_overrides_are_rejected() {
    assert!(ValueOverride::from_flags(true, false, true).is_err());
    assert_eq!(ValueOverride::from_flags(false, false, false), Ok(None));
}

#[test]
fn rename_rules() {
    assert_eq!(RenameRule::from_name("PascalCase").unwrap().apply("first_name"), "FirstName");
    assert_eq!(RenameRule::from_name("camelCase").unwrap().apply("first_name"), "firstName");
    assert_eq!(RenameRule::from_name("snake_case").unwrap().apply("firstName"), "first_name");
    assert_eq!(
        RenameRule::from_name("SCREAMING_SNAKE_CASE").unwrap().apply("first_name"),
        "FIRST_NAME"
    );
    assert!(RenameRule::from_name("kebab-case").is_none());
}
