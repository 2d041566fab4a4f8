use ordo_diagnostic::{DiagnosticCode, Severity};
use ordo_ir::{
    AccessPath, BaseSchema, MemberKind, MemberSchema, PropertySchema, TypeArgument, TypeShape,
    ValueType,
};
use pretty_assertions::assert_eq;

use super::*;
use crate::{extract, ExtractOptions, NumericKind};

const METHOD: &str = "get_comparison";

fn run(schema: &TypeSchema) -> (Result<DispatchPlan, ErrorGuaranteed>, Vec<DiagnosticCode>) {
    let descriptor = extract(schema, &ExtractOptions::default()).unwrap();
    let mut queue = DiagnosticQueue::new();
    let plan = validate(schema, descriptor, METHOD, &mut queue);
    let codes = queue.flush().into_iter().map(|d| d.code).collect();
    (plan, codes)
}

fn person() -> TypeSchema {
    TypeSchema::new("Person", TypeShape::Struct)
        .with_property(PropertySchema::field("Name", ValueType::text("String")))
        .with_property(PropertySchema::field("Age", ValueType::integer("i32")))
}

#[test]
fn valid_type_produces_plan_without_diagnostics() {
    let (plan, codes) = run(&person());
    let plan = plan.unwrap();

    assert!(codes.is_empty());
    assert_eq!(plan.method, METHOD);
    assert_eq!(plan.property_names().collect::<Vec<_>>(), vec!["Name", "Age"]);
    assert_eq!(
        plan.property("Age").unwrap().strategy,
        ComparisonStrategy::Numeric(NumericKind::Integer)
    );
    assert_eq!(
        plan.property("Name").unwrap().strategy,
        ComparisonStrategy::LocaleText
    );
}

#[test]
fn unsupported_properties_are_dropped_silently() {
    let schema = person().with_property(PropertySchema::field("Tags", ValueType::opaque("Vec<f32>")));
    let (plan, codes) = run(&schema);

    assert!(codes.is_empty());
    let plan = plan.unwrap();
    assert!(plan.property("Tags").is_none());
    assert_eq!(plan.properties.len(), 2);
    assert_eq!(plan.hidden, vec!["Tags".to_string()]);
}

#[test]
fn dropped_declarations_still_hide_opaque_base_names() {
    let schema = TypeSchema::new("Derived", TypeShape::Struct)
        .with_base(BaseSchema::opaque("Base", AccessPath::field("base")))
        .with_property(PropertySchema::field("age", ValueType::opaque("HashMap<u8, u8>")));
    let (plan, codes) = run(&schema);

    assert!(codes.is_empty());
    let plan = plan.unwrap();
    assert!(plan.properties.is_empty());
    assert_eq!(plan.hidden, vec!["age".to_string()]);
    assert_eq!(plan.delegates.len(), 1);
}

#[test]
fn zero_comparable_properties_warns_and_still_plans() {
    let schema = TypeSchema::new("Blob", TypeShape::Struct)
        .with_property(PropertySchema::field("Bytes", ValueType::opaque("Vec<f32>")));
    let (plan, codes) = run(&schema);

    assert_eq!(codes, vec![DiagnosticCode::NoComparablePropertyFoundWarning]);
    let plan = plan.unwrap();
    assert!(plan.is_empty());
}

#[test]
fn opaque_base_suppresses_the_zero_property_warning() {
    let schema = TypeSchema::new("Employee", TypeShape::Struct)
        .with_base(BaseSchema::opaque("Person", AccessPath::field("person")));
    let (plan, codes) = run(&schema);

    assert!(codes.is_empty());
    let plan = plan.unwrap();
    assert!(plan.properties.is_empty());
    assert!(!plan.is_empty());
}

#[test]
fn member_collision_aborts() {
    let schema = person().with_member(MemberSchema::new(METHOD, MemberKind::Field, Span::new(9)));
    let (plan, codes) = run(&schema);

    assert!(plan.is_err());
    assert_eq!(codes, vec![DiagnosticCode::GetComparisonMethodCollisionError]);
}

#[test]
fn members_with_other_names_do_not_collide() {
    let schema = person().with_member(MemberSchema::new(
        "comparison",
        MemberKind::Method { parameters: 1 },
        Span::new(9),
    ));
    let (plan, codes) = run(&schema);

    assert!(plan.is_ok());
    assert!(codes.is_empty());
}

#[test]
fn unusable_type_argument_aborts() {
    let schema = person().with_type_argument(TypeArgument::unusable(
        "_",
        "inferred types cannot be generated for",
        Span::new(2),
    ));
    let (plan, codes) = run(&schema);

    assert!(plan.is_err());
    assert_eq!(codes, vec![DiagnosticCode::InvalidTypeArgumentError]);
}

#[test]
fn usable_type_argument_becomes_the_target() {
    let schema = TypeSchema::new("Row", TypeShape::Struct)
        .with_property(PropertySchema::field("Key", ValueType::ordered("u8")))
        .with_type_argument(TypeArgument::usable("Row<u8>", Span::new(2)));
    let (plan, _) = run(&schema);

    let plan = plan.unwrap();
    assert_eq!(plan.type_name, "Row");
    assert_eq!(plan.target, "Row<u8>");
}

#[test]
fn all_rules_are_checked() {
    let schema = TypeSchema::new("Broken", TypeShape::Struct)
        .with_property(PropertySchema::field("Bytes", ValueType::opaque("Vec<f32>")))
        .with_member(MemberSchema::new(METHOD, MemberKind::Field, Span::new(1)))
        .with_type_argument(TypeArgument::unusable("&Broken", "references are not types to generate for", Span::new(2)));
    let (plan, codes) = run(&schema);

    assert!(plan.is_err());
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::InvalidTypeArgumentError,
            DiagnosticCode::GetComparisonMethodCollisionError,
            DiagnosticCode::NoComparablePropertyFoundWarning,
        ]
    );
}

#[test]
fn duplicate_names_are_errors() {
    let schema = person().with_property(
        PropertySchema::field("Age", ValueType::float("f64")).with_span(Span::new(7)),
    );
    let descriptor = extract(&schema, &ExtractOptions::default()).unwrap();
    let mut queue = DiagnosticQueue::new();
    let plan = validate(&schema, descriptor, METHOD, &mut queue);

    assert!(plan.is_err());
    let diags = queue.flush();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, DiagnosticCode::DuplicatePropertyNameError);
    assert_eq!(diags[0].primary_span(), Some(Span::new(7)));
}

#[test]
fn invalid_names_are_errors() {
    let schema = person().with_property(PropertySchema::field("First Name", ValueType::text("String")));
    let (plan, codes) = run(&schema);

    assert!(plan.is_err());
    assert_eq!(codes, vec![DiagnosticCode::InvalidPropertyNameError]);
}

#[test]
fn diagnostics_name_the_offending_symbols() {
    let schema = person().with_member(MemberSchema::new(METHOD, MemberKind::Field, Span::new(9)));
    let descriptor = extract(&schema, &ExtractOptions::default()).unwrap();
    let mut queue = DiagnosticQueue::new();
    let _ = validate(&schema, descriptor, METHOD, &mut queue);

    let diag = queue.flush().remove(0);
    assert_eq!(diag.severity, Severity::Error);
    assert!(diag.message.contains("`Person`"));
    assert!(diag.message.contains("`get_comparison`"));
}
