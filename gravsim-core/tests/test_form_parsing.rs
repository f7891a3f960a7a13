//! Decimal parsing for user-entered fields

use gravsim_core::form::{parse_decimal, parse_positive};
use gravsim_core::{BodyForm, ValidationError};

#[test]
fn test_blank_is_none() {
    assert_eq!(parse_decimal("", "mass"), Ok(None));
    assert_eq!(parse_decimal("   ", "mass"), Ok(None));
}

#[test]
fn test_period_and_comma_separators() {
    assert_eq!(parse_decimal("12.75", "x"), Ok(Some(12.75)));
    assert_eq!(parse_decimal("12,75", "x"), Ok(Some(12.75)));
    assert_eq!(parse_decimal(" -3,5 ", "x"), Ok(Some(-3.5)));
    assert_eq!(parse_decimal("1e3", "x"), Ok(Some(1000.0)));
}

#[test]
fn test_garbage_is_an_error() {
    for text in ["abc", "1,2,3", "1.5kg", "--1", "inf", "NaN"] {
        assert_eq!(
            parse_decimal(text, "velocity_x"),
            Err(ValidationError::InvalidNumber { field: "velocity_x" }),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn test_positive_rejects_zero_and_negative() {
    assert_eq!(parse_positive("0.001", "radius"), Ok(Some(0.001)));
    assert_eq!(parse_positive("", "radius"), Ok(None));
    assert!(parse_positive("0", "radius").is_err());
    assert!(parse_positive("-0,5", "radius").is_err());
}

#[test]
fn test_form_name() {
    assert_eq!(BodyForm::new().name(), None);
    assert_eq!(BodyForm::new().with_name("  ").name(), None);
    assert_eq!(BodyForm::new().with_name(" Earth ").name(), Some("Earth"));
}

#[test]
fn test_form_clear() {
    let mut form = BodyForm::new()
        .with_name("a")
        .with_mass("1")
        .with_radius("2")
        .with_velocity("3", "4")
        .with_position("5", "6");
    form.clear();
    assert_eq!(form, BodyForm::default());
}
