//! Integration tests for the built-in validators through the prelude.
//!
//! Verifies that `use formwork_validator::prelude::*` brings in everything a
//! form needs to describe its fields' rules.

use chrono::NaiveDate;
use formwork_validator::prelude::*;
use indexmap::IndexSet;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// REQUIRED ACROSS FIELD TYPES
// ============================================================================

#[rstest]
#[case::empty_text(Box::new(String::new()), false)]
#[case::text(Box::new(String::from("abc")), true)]
#[case::unset_date(Box::new(DISTANT_FUTURE), false)]
#[case::real_date(Box::new(date(2025, 1, 1)), true)]
#[case::unset_number(Box::new(NO_NUMBER), false)]
#[case::number(Box::new(1250.0_f64), true)]
#[case::no_choice(Box::new(None::<u32>), false)]
#[case::choice(Box::new(Some(2_u32)), true)]
#[case::no_tags(Box::new(IndexSet::<String>::new()), false)]
fn required_across_types(#[case] value: Box<dyn FormValue>, #[case] valid: bool) {
    assert_eq!(required().is_valid(value.as_ref()), valid);
}

// ============================================================================
// COMPARISON
// ============================================================================

#[test]
fn at_least_boundaries() {
    assert!(!at_least(5).is_valid(&4));
    assert!(at_least(5).is_valid(&5));
    assert!(at_least(5).is_valid(&"non-numeric-type"));
}

#[test]
fn date_window_for_move_in() {
    let window = between(date(2025, 1, 1), date(2025, 12, 31));
    assert!(window.is_valid(&date(2025, 6, 1)));
    assert!(!window.is_valid(&date(2026, 1, 1)));
    assert_eq!(
        window.message(None).as_deref(),
        Some("Must be between 2025-01-01 and 2025-12-31")
    );
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn price_rules_in_priority_order() {
    let price = many([
        required().into_any(),
        at_least(0.0_f64).into_any(),
        at_most(10_000.0_f64).into_any(),
    ]);

    assert!(price.is_valid(&1_250.0_f64));
    assert_eq!(price.message(Some(&NO_NUMBER)).as_deref(), Some("Required field"));
    assert_eq!(price.message(Some(&-1.0_f64)).as_deref(), Some("Must be at least 0"));
    assert_eq!(
        price.message(Some(&20_000.0_f64)).as_deref(),
        Some("Must be at most 10000")
    );
    assert_eq!(price.message(None).as_deref(), Some("Required field"));
}

#[test]
fn custom_message_through_extension() {
    let photos = at_least(1_usize).with_message("Add at least one photo").into_any();
    assert!(!photos.is_valid(&0_usize));
    assert_eq!(photos.message(Some(&0_usize)).as_deref(), Some("Add at least one photo"));
    // Counts of another integer type cannot be compared, so they pass.
    assert!(photos.is_valid(&0_u32));
}

#[test]
fn and_over_erased_values() {
    let rooms = required().and(between(1_u32, 6_u32));
    assert!(rooms.is_valid(&3_u32));
    assert!(!rooms.is_valid(&9_u32));
}

#[test]
fn validate_with_all_reports_every_failure() {
    let checks = [
        required().into_any(),
        at_least(10_i64).into_any(),
        at_most(0_i64).into_any(),
    ];
    let errors = validate_with_all(&checks, &5_i64).unwrap_err();
    let codes: Vec<_> = errors.errors().iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, ["at_least", "at_most"]);
}

// ============================================================================
// CONSTANT VALIDATORS
// ============================================================================

#[test]
fn always_and_never() {
    assert!(always().into_any().is_valid(&String::new()));
    assert!(!never().into_any().is_valid(&String::from("x")));
    assert_eq!(never().into_any().message(None), None);
}

#[test]
fn group_predicate_with_fallback_message() {
    let start = date(2025, 3, 1);
    let end = date(2025, 2, 1);
    let ordered = AnyValidator::from_fn(move || start <= end, Some("End date must follow start".into()));

    assert!(!ordered.is_valid(&String::from("anything")));
    assert_eq!(ordered.message(None).as_deref(), Some("End date must follow start"));
}

// ============================================================================
// SERDE-GATED: JSON error output
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn error_to_json() {
    use serde_json::json;

    let error = at_least(3_i32).validate(&1_i32).unwrap_err().with_field("bedrooms");
    assert_eq!(
        error.to_json_value(),
        json!({
            "code": "at_least",
            "message": "Must be at least 3",
            "field": "bedrooms",
            "params": { "limit": "3" },
            "nested": [],
        })
    );
}
