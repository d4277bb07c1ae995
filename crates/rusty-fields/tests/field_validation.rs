// Integration tests for the public field validators

use pretty_assertions::assert_eq;
use rusty_fields::{Email, ErrorCode, IntegerChoice, ValidationError, Validator, Value};

fn choice_error() -> ValidationError {
    ValidationError::new("Not a valid choice.", ErrorCode::Choice)
}

#[test]
fn test_email() {
    let validator = Email::new();
    assert_eq!(
        validator.validate_or_error(&Value::from("mail@somewhere.com")),
        Ok(Some("mail@somewhere.com".to_string()))
    );

    let expected = ValidationError::new("Must be a valid email.", ErrorCode::Pattern);
    for input in ["mail@somewhere.", "mail@somewhere", "mail@", "mail"] {
        assert_eq!(
            validator.validate_or_error(&Value::from(input)),
            Err(expected.clone()),
            "input: {input}"
        );
    }
}

#[test]
fn test_integer_choice_required() {
    let validator = IntegerChoice::new([(1, "one"), (2, "two"), (3, "three")]);

    assert_eq!(
        validator.validate_or_error(&Value::Null),
        Err(ValidationError::new("May not be null.", ErrorCode::Null))
    );
    assert_eq!(
        validator.validate_or_error(&Value::from("")),
        Err(ValidationError::new("This field is required.", ErrorCode::Required))
    );
}

#[test]
fn test_integer_choice_membership() {
    let validator = IntegerChoice::new([(1, "one"), (2, "two"), (3, "three")]);

    assert_eq!(validator.validate_or_error(&Value::from(4)), Err(choice_error()));
    assert_eq!(validator.validate_or_error(&Value::from("4")), Err(choice_error()));
    assert_eq!(validator.validate_or_error(&Value::from(1)), Ok(Some(1)));
    assert_eq!(validator.validate_or_error(&Value::from("1")), Ok(Some(1)));
}

#[test]
fn test_integer_choice_allow_null() {
    let validator = IntegerChoice::new([(1, "one"), (2, "two"), (3, "three")]).allow_null(true);
    assert_eq!(validator.validate_or_error(&Value::Null), Ok(None));
    assert_eq!(validator.validate_or_error(&Value::from("")), Ok(None));

    let validator = IntegerChoice::new([
        (None, "empty"),
        (Some(1), "one"),
        (Some(2), "two"),
        (Some(3), "three"),
    ])
    .allow_null(true);
    assert_eq!(validator.validate_or_error(&Value::from("")), Ok(None));
    assert_eq!(validator.validate_or_error(&Value::Null), Ok(None));
}

#[test]
fn test_integer_choice_literal_values() {
    let validator = IntegerChoice::new([1, 2, 3]);
    assert_eq!(validator.validate_or_error(&Value::from(2)), Ok(Some(2)));
    assert_eq!(validator.validate_or_error(&Value::from("2")), Ok(Some(2)));
}

#[tokio::test]
async fn test_async_entry_point_matches_sync() {
    use rusty_fields::AsyncValidator;

    let validator = IntegerChoice::new([1, 2, 3]);
    assert_eq!(validator.validate_async(&Value::from("3")).await, Ok(Some(3)));
    assert_eq!(validator.validate_async(&Value::from("9")).await, Err(choice_error()));

    let email = Email::new().allow_null(true);
    assert_eq!(email.validate_async(&Value::Null).await, Ok(None));
}
