//! Aggregation of field validity into form validity across passes.

use std::sync::{Arc, Mutex};

use formwork::prelude::*;
use pretty_assertions::assert_eq;

fn three_required_fields() -> Form {
    Form::builder()
        .push(Field::text_line("a").validator(required()))
        .push(Field::text_line("b").validator(required()))
        .push(Field::text_line("c").validator(required()))
        .build()
        .unwrap()
}

fn text(s: &str) -> String {
    s.to_owned()
}

// ============================================================================
// FLIP AND RECOVER
// ============================================================================

#[test]
fn validity_flips_and_recovers() {
    let mut form = three_required_fields();
    let mut values = FormValues::new()
        .with("a", text("x"))
        .with("b", text("y"))
        .with("c", text("z"));

    assert!(form.render(&values).is_valid());

    values.set("b", text(""));
    assert!(!form.render(&values).is_valid());
    assert!(!form.state().is_valid);

    values.set("b", text("back"));
    assert!(form.render(&values).is_valid());
    assert!(form.state().is_valid);
}

#[test]
fn every_pass_gets_a_new_id() {
    let mut form = three_required_fields();
    let values = FormValues::new();

    let first = form.render(&values).state.pass;
    let second = form.render(&values).state.pass;
    assert!(second > first);
    assert_eq!(form.state().pass, second);
}

#[test]
fn state_before_any_pass_is_valid() {
    let form = three_required_fields();
    assert_eq!(form.state(), FormState::default());
}

// ============================================================================
// CONDITIONAL FIELDS
// ============================================================================

#[test]
fn absent_field_does_not_take_part() {
    let mut form = Form::builder()
        .push(Field::text_line("a").validator(required()))
        .push(Field::text_line("b").validator(required()))
        .push(
            Field::numeric("c")
                .validator(required())
                .when(|values| values.get_as::<String>("a").is_some_and(|a| a == "rent")),
        )
        .build()
        .unwrap();

    // "c" is unset and would fail, but it is not rendered.
    let mut values = FormValues::new().with("a", text("sell")).with("b", text("y"));
    let snapshot = form.render(&values);
    assert!(snapshot.is_valid());
    assert!(snapshot.field("c").is_none());
    assert_eq!(snapshot.fields.len(), 2);

    // Once rendered, it takes part.
    values.set("a", text("rent"));
    let snapshot = form.render(&values);
    assert!(!snapshot.is_valid());
    assert_eq!(snapshot.field("c").map(|o| o.valid), Some(false));

    values.set("c", 900.0_f64);
    assert!(form.render(&values).is_valid());
}

#[test]
fn hidden_invalid_field_does_not_hold_form_invalid() {
    let mut form = Form::builder()
        .push(Field::text_line("a").validator(required()))
        .push(Field::text_line("b").validator(required()).when(|values| values.contains("show_b")))
        .build()
        .unwrap();

    let mut values = FormValues::new().with("a", text("x")).with("show_b", true);
    assert!(!form.render(&values).is_valid());

    values.remove("show_b");
    assert!(form.render(&values).is_valid());
}

// ============================================================================
// SUBSCRIBERS
// ============================================================================

#[test]
fn subscribers_follow_form_validity() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut form = three_required_fields();
    form.subscribe(move |state| sink.lock().unwrap().push(state.is_valid));

    let mut values = FormValues::new()
        .with("a", text("x"))
        .with("b", text("y"))
        .with("c", text("z"));
    form.render(&values);
    values.set("a", text(""));
    form.render(&values);
    form.render(&values);
    values.set("a", text("x"));
    form.render(&values);

    assert_eq!(*seen.lock().unwrap(), vec![false, true]);
}

// ============================================================================
// DISPLAY SUPPRESSION
// ============================================================================

#[test]
fn suppressed_messages_do_not_change_validity() {
    let mut form = Form::builder()
        .push(
            Field::text_line("a")
                .validator(required())
                .validation_errors_visible(false),
        )
        .push(Field::text_line("b").validator(required()))
        .build()
        .unwrap();
    form.set_show_validation_errors(true);

    let values = FormValues::new().with("b", text("y"));
    let snapshot = form.render(&values);

    let a = snapshot.field("a").unwrap();
    assert!(!a.valid);
    assert_eq!(a.message, None);
    assert!(a.error.is_some());
    assert!(!snapshot.is_valid());
}
