// File: src/validation/mod.rs
// Purpose: Validator protocol shared by every field type

use async_trait::async_trait;

use crate::error::ValidationError;
use crate::value::Value;

pub mod choice;
pub mod email;

pub use choice::IntegerChoice;
pub use email::Email;

/// Outcome of a single field validation.
///
/// `Ok(Some(v))` is a normalized value, `Ok(None)` is an accepted null and
/// `Err(e)` is a user-facing validation error.
pub type FieldResult<T> = Result<Option<T>, ValidationError>;

/// Trait for synchronous field validators
pub trait Validator {
    /// Normalized value produced on success
    type Output;

    /// Validates raw input, returning the normalized value or an error.
    ///
    /// Never panics on bad input; every failure comes back as `Err`.
    fn validate_or_error(&self, raw: &Value) -> FieldResult<Self::Output>;
}

/// Async entry point so synchronous and database-backed validators can be
/// driven the same way from request handlers
#[async_trait]
pub trait AsyncValidator: Send + Sync {
    type Output: Send;
    type Error: From<ValidationError> + Send;

    async fn validate_async(&self, raw: &Value) -> Result<Option<Self::Output>, Self::Error>;
}

#[async_trait]
impl<V> AsyncValidator for V
where
    V: Validator + Send + Sync,
    V::Output: Send,
{
    type Output = V::Output;
    type Error = ValidationError;

    async fn validate_async(&self, raw: &Value) -> Result<Option<Self::Output>, Self::Error> {
        self.validate_or_error(raw)
    }
}

/// What the caller should do after the shared null/empty checks
#[derive(Debug, PartialEq)]
pub enum Presence {
    /// Input is null or blank and nulls are allowed
    Absent,
    /// Input carries a value that still needs type-specific checks
    Present,
}

/// Null and empty-string handling common to every field type.
///
/// Null is rejected with `null` and the empty string with `required`,
/// unless `allow_null` is set, in which case both resolve to `Absent`.
pub fn check_presence(raw: &Value, allow_null: bool) -> Result<Presence, ValidationError> {
    if raw.is_null() {
        return if allow_null {
            Ok(Presence::Absent)
        } else {
            Err(ValidationError::null())
        };
    }

    if raw.is_empty_string() {
        return if allow_null {
            Ok(Presence::Absent)
        } else {
            Err(ValidationError::required())
        };
    }

    Ok(Presence::Present)
}

/// Presence checks followed by integer coercion.
///
/// Input that is not an integer is reported as `choice`, same as an unknown
/// id, so callers can reject it before looking at any choice set.
pub fn parse_choice(raw: &Value, allow_null: bool) -> FieldResult<i64> {
    if check_presence(raw, allow_null)? == Presence::Absent {
        return Ok(None);
    }

    match raw.to_integer() {
        Some(value) => Ok(Some(value)),
        None => {
            tracing::debug!(input = %raw, "choice input is not an integer");
            Err(ValidationError::choice())
        }
    }
}

/// Coerces `raw` to an integer and checks it with `is_allowed`
pub fn coerce_choice(
    raw: &Value,
    allow_null: bool,
    is_allowed: impl FnOnce(i64) -> bool,
) -> FieldResult<i64> {
    let Some(value) = parse_choice(raw, allow_null)? else {
        return Ok(None);
    };

    if is_allowed(value) {
        Ok(Some(value))
    } else {
        tracing::debug!(value, "value is not among the allowed choices");
        Err(ValidationError::choice())
    }
}
