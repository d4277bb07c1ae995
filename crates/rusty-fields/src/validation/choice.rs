// File: src/validation/choice.rs
// Purpose: Integer choice field backed by a fixed choice set

use super::{coerce_choice, FieldResult, Validator};
use crate::choices::Choices;
use crate::value::Value;

/// Integer field restricted to a fixed set of choices
///
/// ```
/// use rusty_fields::{IntegerChoice, Validator, Value};
///
/// let field = IntegerChoice::new([(1, "one"), (2, "two")]);
/// assert_eq!(field.validate_or_error(&Value::from("2")), Ok(Some(2)));
/// assert!(field.validate_or_error(&Value::from(3)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntegerChoice {
    choices: Choices,
    allow_null: bool,
}

impl IntegerChoice {
    pub fn new(choices: impl Into<Choices>) -> Self {
        Self {
            choices: choices.into(),
            allow_null: false,
        }
    }

    /// Accept null and blank input as "no value"
    pub fn allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }

    pub fn allows_null(&self) -> bool {
        self.allow_null
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }
}

impl Validator for IntegerChoice {
    type Output = i64;

    fn validate_or_error(&self, raw: &Value) -> FieldResult<i64> {
        coerce_choice(raw, self.allow_null, |value| self.choices.contains(value))
    }
}
