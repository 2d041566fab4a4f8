use ordo_ir::{AccessStep, ArgumentStatus, Capabilities, MemberKind, ValueKind};
use pretty_assertions::assert_eq;
use syn::{parse_quote, DeriveInput};

use super::*;

fn lowered(input: &DeriveInput) -> Lowered {
    lower(input).unwrap()
}

fn names(schema: &TypeSchema) -> Vec<&str> {
    schema.properties.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn named_fields_become_properties() {
    let input: DeriveInput = parse_quote! {
        struct Person {
            name: String,
            pub age: i32,
            pub(crate) nickname: Option<String>,
        }
    };
    let lowered = lowered(&input);
    let schema = &lowered.schema;
    assert_eq!(schema.name, "Person");
    assert_eq!(schema.shape, TypeShape::Struct);
    assert_eq!(names(schema), vec!["name", "age", "nickname"]);

    let age = &schema.properties[1];
    assert_eq!(age.ty.kind, ValueKind::Integer);
    assert_eq!(age.visibility, Visibility::Public);
    assert_eq!(age.access.steps(), &[AccessStep::Field("age".to_string())]);

    let nickname = &schema.properties[2];
    assert!(nickname.nullable);
    assert_eq!(nickname.ty.kind, ValueKind::Text);
    assert_eq!(nickname.visibility, Visibility::Crate);

    assert_eq!(lowered.options.method, "get_comparison");
    assert!(lowered.host.inherent);
    assert!(lowered.host.target.is_none());
}

#[test]
fn rename_rules_and_overrides() {
    let input: DeriveInput = parse_quote! {
        #[comparison(rename_all = "PascalCase")]
        struct Person {
            first_name: String,
            #[comparison(rename = "Years")]
            age: i32,
            #[comparison(skip)]
            cache: Vec<u8>,
            r#type: u8,
        }
    };
    let lowered = lowered(&input);
    assert_eq!(names(&lowered.schema), vec!["FirstName", "Years", "Type"]);
    assert_eq!(
        lowered.schema.properties[2].access.steps(),
        &[AccessStep::Field("r#type".to_string())]
    );
    // Skipped fields are still members
    assert!(lowered.schema.members.iter().any(|m| m.name == "cache"));
}

#[test]
fn tuple_fields_need_a_name() {
    let input: DeriveInput = parse_quote! {
        struct Pair(#[comparison(rename = "Left")] u32, f64);
    };
    let lowered = lowered(&input);
    assert_eq!(names(&lowered.schema), vec!["Left"]);
    assert_eq!(lowered.schema.properties[0].access.steps(), &[AccessStep::Index(0)]);
    assert!(lowered.schema.members.is_empty());
}

#[test]
fn empty_enum_is_static() {
    let input: DeriveInput = parse_quote! {
        enum Helpers {}
    };
    assert!(lowered(&input).schema.is_static());
}

#[test]
fn enums_and_unions_have_no_properties() {
    let input: DeriveInput = parse_quote! {
        enum Shape { Circle { radius: f64 }, Square(f64) }
    };
    let schema = lowered(&input).schema;
    assert!(!schema.is_static());
    assert!(schema.properties.is_empty());

    let input: DeriveInput = parse_quote! {
        union Bits { int: u32, float: f32 }
    };
    assert!(lowered(&input).schema.properties.is_empty());
}

#[test]
fn base_fields_become_opaque_bases() {
    let input: DeriveInput = parse_quote! {
        struct Employee {
            #[comparison(base)]
            person: Person,
            salary: u64,
        }
    };
    let schema = lowered(&input).schema;
    assert_eq!(names(&schema), vec!["salary"]);
    assert_eq!(schema.bases.len(), 1);
    assert_eq!(schema.bases[0].name, "Person");
    assert!(schema.bases[0].properties.is_none());
    assert_eq!(
        schema.bases[0].access.steps(),
        &[AccessStep::Field("person".to_string())]
    );
}

#[test]
fn base_rejects_value_options() {
    let input: DeriveInput = parse_quote! {
        struct Employee {
            #[comparison(base, rename = "P")]
            person: Person,
        }
    };
    assert!(lower(&input).is_err());
}

#[test]
fn getters_are_public_method_properties() {
    let input: DeriveInput = parse_quote! {
        #[comparison(getter(name = "Initials", with = "Self::initials", ty = "Option<String>"))]
        struct Person { name: String }
    };
    let schema = lowered(&input).schema;
    let initials = &schema.properties[1];
    assert_eq!(initials.name, "Initials");
    assert!(initials.nullable);
    assert_eq!(initials.visibility, Visibility::Public);
    assert_eq!(
        initials.access.steps(),
        &[AccessStep::Getter("Self::initials".to_string())]
    );
    let member = schema.members.iter().find(|m| m.name == "initials").unwrap();
    assert_eq!(member.kind, MemberKind::Method { parameters: 0 });
}

#[test]
fn invalid_options_are_all_reported() {
    let input: DeriveInput = parse_quote! {
        #[comparison(visibility = "friends", rename_all = "kebab-case", method = "not a name")]
        struct Person { age: i32 }
    };
    let err = lower(&input).unwrap_err();
    assert_eq!(err.len(), 3);
}

#[test]
fn visibility_option_reaches_analysis() {
    let input: DeriveInput = parse_quote! {
        #[comparison(visibility = "crate", method = "comparison_for", inherent = false)]
        struct Person { age: i32 }
    };
    let lowered = lowered(&input);
    assert_eq!(lowered.options.min_visibility, Visibility::Crate);
    assert_eq!(lowered.options.method, "comparison_for");
    assert!(!lowered.host.inherent);
}

#[test]
fn generic_bounds_classify_fields() {
    let input: DeriveInput = parse_quote! {
        struct Row<T: Ord, U> where U: PartialOrd { key: T, weight: U }
    };
    let schema = lowered(&input).schema;
    assert_eq!(schema.properties[0].ty.capabilities, Capabilities::ORDERED);
    assert_eq!(schema.properties[1].ty.capabilities, Capabilities::RELATIONAL);
}

#[test]
fn usable_target_substitutes_generics() {
    let input: DeriveInput = parse_quote! {
        #[comparison(target = "Row<'static, f64, 4>")]
        struct Row<'a, T, const N: usize> { label: &'a str, value: T, cells: [T; N] }
    };
    let lowered = lowered(&input);
    let argument = lowered.schema.type_argument.as_ref().unwrap();
    assert!(argument.is_usable());
    assert_eq!(argument.text, "Row<'static, f64, 4>");
    assert_eq!(lowered.schema.target_name(), "Row<'static, f64, 4>");

    let properties = &lowered.schema.properties;
    assert_eq!(properties[0].ty.kind, ValueKind::Text);
    assert_eq!(properties[1].ty.kind, ValueKind::Float);
    assert_eq!(properties[2].ty.display, "[f64; 4]");
    assert!(lowered.host.target.is_some());
}

#[test]
fn unusable_targets_keep_the_reason() {
    let cases = [
        ("Row<u32, u8>", "generic argument"),
        ("Other<u32>", "does not name"),
        ("Row<_>", "inferred"),
        ("Row<impl Ord>", "impl Trait"),
        ("&Row<u32>", "expected a path"),
        ("Row<'static>", "does not fit"),
        ("not a type!", "is not a type"),
    ];
    for (text, expected) in cases {
        let input: DeriveInput = syn::parse_str(&format!(
            "#[comparison(target = {text:?})] struct Row<T> {{ value: T }}"
        ))
        .unwrap();
        let lowered = lowered(&input);
        let argument = lowered.schema.type_argument.as_ref().unwrap();
        let ArgumentStatus::Unusable { reason } = &argument.status else {
            panic!("`{text}` should be unusable");
        };
        assert!(reason.contains(expected), "{text}: {reason}");
        assert!(lowered.host.target.is_none());
    }
}

#[test]
fn span_table_resolves_interned_spans() {
    let mut table = SpanTable::default();
    let span = table.intern(proc_macro2::Span::call_site());
    assert_eq!(span.index(), 0);
    assert_eq!(table.intern(proc_macro2::Span::call_site()).index(), 1);
    // Dummy and unknown spans fall back to the call site
    let _ = table.resolve(Span::DUMMY);
    let _ = table.resolve(Span::new(99));
}
