use std::cmp::Ordering;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::collation::{with_collator, OrdinalCollator};

#[test]
fn float_epsilon_equality() {
    assert_eq!(float(&(0.1 + 0.2), &0.3), Ordering::Equal);
    assert_eq!(float(&1.0, &(1.0 + 5e-8)), Ordering::Equal);
    assert_eq!(float(&1.0, &1.000_001), Ordering::Less);
    assert_eq!(float(&2.0_f32, &1.0_f32), Ordering::Greater);
}

#[test]
fn float_nan_falls_back_to_total_order() {
    assert_eq!(float(&f64::NAN, &f64::NAN), Ordering::Equal);
    assert_eq!(float(&1.0, &f64::NAN), Ordering::Less);
    assert_eq!(float(&f64::INFINITY, &f64::INFINITY), Ordering::Equal);
    assert_eq!(
        float(&f64::NEG_INFINITY, &f64::INFINITY),
        Ordering::Less
    );
}

#[test]
fn relational_treats_incomparable_as_equal() {
    assert_eq!(relational(&1.0, &2.0), Ordering::Less);
    assert_eq!(relational(&f64::NAN, &2.0), Ordering::Equal);
}

#[test]
fn ordered_and_integer_agree_with_ord() {
    assert_eq!(integer(&30_i32, &40_i32), Ordering::Less);
    assert_eq!(ordered("b", "a"), Ordering::Greater);
    assert_eq!(ordered(&(1, 'a'), &(1, 'a')), Ordering::Equal);
}

#[test]
fn nullable_orders_none_first() {
    let cmp = |a: Option<&i32>, b: Option<&i32>| nullable(a, b, integer);
    assert_eq!(cmp(None, None), Ordering::Equal);
    assert_eq!(cmp(None, Some(&i32::MIN)), Ordering::Less);
    assert_eq!(cmp(Some(&0), None), Ordering::Greater);
    assert_eq!(cmp(Some(&1), Some(&2)), Ordering::Less);
}

#[test]
fn text_reads_through_wrappers() {
    with_collator(Arc::new(OrdinalCollator), || {
        assert_eq!(text("a", "b"), Ordering::Less);
        assert_eq!(text(&String::from("b"), &String::from("a")), Ordering::Greater);
        let (a, b): (Box<str>, Box<str>) = ("x".into(), "x".into());
        assert_eq!(text(&a, &b), Ordering::Equal);
        let (a, b) = (Rc::new(String::from("a")), Rc::new(String::from("c")));
        assert_eq!(text(&a, &b), Ordering::Less);
        let (a, b) = (Cow::Borrowed("q"), Cow::<str>::Owned("p".into()));
        assert_eq!(text(&a, &b), Ordering::Greater);
    });
}

proptest! {
    #[test]
    fn float_is_antisymmetric(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(float(&a, &b), float(&b, &a).reverse());
    }

    #[test]
    fn float_is_reflexive(a in any::<f64>()) {
        prop_assert_eq!(float(&a, &a), Ordering::Equal);
    }

    #[test]
    fn float_matches_sign_outside_tolerance(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
        prop_assume!((a - b).abs() >= FLOAT_EPSILON);
        prop_assert_eq!(float(&a, &b), a.partial_cmp(&b).unwrap_or(Ordering::Equal));
    }
}
