//! # rusty-fields
//!
//! Field validators for HTML forms.
//!
//! Each validator takes a raw [`Value`] and returns either a normalized
//! value or a [`ValidationError`] carrying display text and a stable code
//! (`null`, `required`, `pattern`, `choice`, `type`).
//!
//! ```
//! use rusty_fields::{Email, ErrorCode, Validator, Value};
//!
//! let email = Email::new();
//! assert_eq!(
//!     email.validate_or_error(&Value::from("mail@somewhere.com")),
//!     Ok(Some("mail@somewhere.com".to_string()))
//! );
//!
//! let err = email.validate_or_error(&Value::from("mail@somewhere")).unwrap_err();
//! assert_eq!(err.code, ErrorCode::Pattern);
//! ```
//!
//! Database-backed choices live in the `rusty-fields-db` crate.

pub mod choices;
pub mod config;
pub mod error;
pub mod form;
pub mod select;
pub mod validation;
pub mod value;

pub use choices::{Choice, Choices};
pub use config::{ChoiceConfig, FieldConfig, FormConfig};
pub use error::{ErrorCode, ValidationError};
pub use form::{Field, Form, FormResult};
pub use select::render_select;
pub use validation::{
    check_presence, coerce_choice, parse_choice, AsyncValidator, Email, FieldResult, IntegerChoice, Presence,
    Validator,
};
pub use value::Value;
