//! End-to-end expansion: tokens in, tokens out.

use pretty_assertions::assert_eq;
use syn::{parse_quote, DeriveInput};

use super::expand;

fn expanded(input: &DeriveInput) -> String {
    expand(input).to_string()
}

fn parses(input: &DeriveInput) -> syn::File {
    match syn::parse2(expand(input)) {
        Ok(file) => file,
        Err(err) => panic!("expansion is not valid Rust: {err}"),
    }
}

#[test]
fn person_expands_to_provider() {
    let input: DeriveInput = parse_quote! {
        #[comparison(rename_all = "PascalCase")]
        struct Person {
            name: String,
            age: i32,
        }
    };
    let file = parses(&input);
    assert_eq!(file.items.len(), 2);
    let text = expanded(&input);
    assert!(text.contains("PropertyComparisonProvider"));
    assert!(!text.contains("compile_error"));
}

#[test]
fn static_target_is_a_single_error() {
    let input: DeriveInput = parse_quote! {
        #[comparison(method = "not valid")]
        enum Helpers {}
    };
    // Attribute errors come first and stop lowering
    assert_eq!(expanded(&input).matches("compile_error").count(), 1);

    let input: DeriveInput = parse_quote! {
        enum Helpers {}
    };
    let text = expanded(&input);
    assert_eq!(text.matches("compile_error").count(), 1);
    assert!(text.contains("StaticTargetTypeError"));
    assert!(!text.contains("PropertyComparisonProvider"));
}

#[test]
fn zero_properties_warn_and_still_generate() {
    let input: DeriveInput = parse_quote! {
        struct Blob { data: Vec<Opaque> }
    };
    let text = expanded(&input);
    assert!(text.contains("NoComparablePropertyFoundWarning"));
    assert!(text.contains("deprecated"));
    assert!(text.contains("PropertyComparisonProvider"));
    assert!(!text.contains("compile_error"));
    parses(&input);
}

#[test]
fn method_collision_aborts() {
    let input: DeriveInput = parse_quote! {
        struct Person { get_comparison: i32 }
    };
    let text = expanded(&input);
    assert!(text.contains("GetComparisonMethodCollisionError"));
    assert!(!text.contains("PropertyComparisonProvider"));
}

#[test]
fn every_error_is_reported() {
    let input: DeriveInput = parse_quote! {
        #[comparison(target = "Other<u8>")]
        struct Person {
            #[comparison(rename = "Age")]
            age: i32,
            #[comparison(rename = "Age")]
            years: i32,
            #[comparison(rename = "not-a-name")]
            name: String,
            get_comparison: u8,
        }
    };
    let text = expanded(&input);
    assert_eq!(text.matches("compile_error").count(), 4);
    for code in [
        "InvalidTypeArgumentError",
        "GetComparisonMethodCollisionError",
        "DuplicatePropertyNameError",
        "InvalidPropertyNameError",
    ] {
        assert!(text.contains(code), "missing {code}");
    }
}

#[test]
fn darling_rejects_unknown_keys() {
    let input: DeriveInput = parse_quote! {
        struct Person {
            #[comparison(descending)]
            age: i32,
        }
    };
    let text = expanded(&input);
    assert!(text.contains("compile_error"));
    assert!(!text.contains("PropertyComparisonProvider"));
}
