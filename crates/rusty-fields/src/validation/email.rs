// File: src/validation/email.rs
// Purpose: Email address field

use once_cell::sync::Lazy;
use regex::Regex;

use super::{check_presence, FieldResult, Presence, Validator};
use crate::error::{ErrorCode, ValidationError};
use crate::value::Value;

// local-part @ domain . tld
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// String field that must look like an email address
#[derive(Debug, Clone, Default)]
pub struct Email {
    allow_null: bool,
}

impl Email {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept null and blank input as "no value"
    pub fn allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = allow_null;
        self
    }

    pub fn allows_null(&self) -> bool {
        self.allow_null
    }
}

impl Validator for Email {
    type Output = String;

    fn validate_or_error(&self, raw: &Value) -> FieldResult<String> {
        if check_presence(raw, self.allow_null)? == Presence::Absent {
            return Ok(None);
        }

        let Some(email) = raw.as_str() else {
            return Err(ValidationError::from_code(ErrorCode::Type));
        };

        if is_valid_email(email) {
            Ok(Some(email.to_string()))
        } else {
            tracing::debug!(code = %ErrorCode::Pattern, "rejected email input");
            Err(ValidationError::from_code(ErrorCode::Pattern))
        }
    }
}
