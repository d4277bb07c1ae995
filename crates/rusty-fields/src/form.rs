// File: src/form.rs
// Purpose: Validate a whole submission against a set of named fields

use std::collections::{BTreeMap, HashMap};

use crate::config::FormConfig;
use crate::error::ValidationError;
use crate::validation::{Email, IntegerChoice, Validator};
use crate::value::Value;

/// Any field type that can appear in a declarative form
#[derive(Debug, Clone)]
pub enum Field {
    Email(Email),
    IntegerChoice(IntegerChoice),
}

impl Field {
    /// Validate and return the normalized value as a `Value` (`Null` when absent)
    pub fn validate(&self, raw: &Value) -> Result<Value, ValidationError> {
        let value = match self {
            Field::Email(field) => field.validate_or_error(raw)?.map(Value::String),
            Field::IntegerChoice(field) => field.validate_or_error(raw)?.map(Value::Int),
        };
        Ok(value.unwrap_or(Value::Null))
    }
}

impl From<Email> for Field {
    fn from(field: Email) -> Self {
        Field::Email(field)
    }
}

impl From<IntegerChoice> for Field {
    fn from(field: IntegerChoice) -> Self {
        Field::IntegerChoice(field)
    }
}

/// Result of validating a form submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormResult {
    /// Normalized values for every field that passed
    pub values: BTreeMap<String, Value>,
    /// First error for every field that failed
    pub errors: BTreeMap<String, ValidationError>,
}

impl FormResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Get the normalized value for a specific field
    pub fn get_value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Error texts keyed by field, ready for template rendering
    pub fn messages(&self) -> HashMap<String, Vec<String>> {
        self.errors
            .iter()
            .map(|(name, err)| (name.clone(), vec![err.text.clone()]))
            .collect()
    }
}

/// Named fields validated together
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: BTreeMap<String, Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a field
    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        self.fields.insert(name.into(), field.into());
        self
    }

    pub fn from_config(config: &FormConfig) -> Self {
        let fields = config
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field.build()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Validate every field; inputs that were not submitted count as null
    pub fn validate(&self, inputs: &HashMap<String, Value>) -> FormResult {
        let mut result = FormResult::default();
        let null = Value::Null;

        for (name, field) in &self.fields {
            let raw = inputs.get(name).unwrap_or(&null);
            match field.validate(raw) {
                Ok(value) => {
                    result.values.insert(name.clone(), value);
                }
                Err(err) => {
                    tracing::debug!(field = %name, code = %err.code, "field failed validation");
                    result.errors.insert(name.clone(), err);
                }
            }
        }

        result
    }

    /// Validate a JSON object body. Anything other than an object counts as
    /// an empty submission.
    pub fn validate_json(&self, body: &serde_json::Value) -> FormResult {
        let inputs: HashMap<String, Value> = body
            .as_object()
            .map(|object| {
                object
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value.clone())))
                    .collect()
            })
            .unwrap_or_default();

        self.validate(&inputs)
    }
}
