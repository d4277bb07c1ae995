//! Structured validation errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCode {
    /// Value absent where nullability is not permitted
    Null,
    /// Empty string submitted for a field that needs a value
    Required,
    /// Value does not match the expected format
    Pattern,
    /// Value is not one of the allowed choices
    Choice,
    /// Value has the wrong type for the field
    Type,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Null => "null",
            ErrorCode::Required => "required",
            ErrorCode::Pattern => "pattern",
            ErrorCode::Choice => "choice",
            ErrorCode::Type => "type",
        }
    }

    /// Message shown to end users when a validator has no custom text
    pub fn default_text(&self) -> &'static str {
        match self {
            ErrorCode::Null => "May not be null.",
            ErrorCode::Required => "This field is required.",
            ErrorCode::Pattern => "Must be a valid email.",
            ErrorCode::Choice => "Not a valid choice.",
            ErrorCode::Type => "Must be a string.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure: display text plus a code callers can branch on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{text}")]
pub struct ValidationError {
    pub text: String,
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn new(text: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }

    /// Error carrying the default message for `code`
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code.default_text(), code)
    }

    pub fn null() -> Self {
        Self::from_code(ErrorCode::Null)
    }

    pub fn required() -> Self {
        Self::from_code(ErrorCode::Required)
    }

    pub fn choice() -> Self {
        Self::from_code(ErrorCode::Choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        assert_eq!(ValidationError::null().text, "May not be null.");
        assert_eq!(ValidationError::required().text, "This field is required.");
        assert_eq!(ValidationError::choice().to_string(), "Not a valid choice.");
    }

    #[test]
    fn test_equality_covers_text_and_code() {
        let a = ValidationError::new("Must be a valid email.", ErrorCode::Pattern);
        assert_eq!(a, ValidationError::from_code(ErrorCode::Pattern));
        assert_ne!(a, ValidationError::new("Must be a valid email.", ErrorCode::Type));
        assert_ne!(a, ValidationError::new("Bad address.", ErrorCode::Pattern));
    }

    #[test]
    fn test_serializes_code_as_token() {
        let json = serde_json::to_value(ValidationError::choice()).unwrap();
        assert_eq!(json["code"], "choice");
        assert_eq!(json["text"], "Not a valid choice.");
    }
}
