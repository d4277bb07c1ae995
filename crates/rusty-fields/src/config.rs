// File: src/config.rs
// Purpose: Declarative field definitions loaded from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::choices::{Choice, Choices};
use crate::form::Field;
use crate::validation::{Email, IntegerChoice};

/// A set of named fields, e.g. from `forms/signup.toml`:
///
/// ```toml
/// [fields.email]
/// kind = "email"
///
/// [fields.plan]
/// kind = "integer_choice"
/// allow_null = true
/// choices = [[1, "Free"], [2, "Pro"], { label = "Undecided" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,
}

/// Configuration for a single field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConfig {
    Email {
        #[serde(default = "default_false")]
        allow_null: bool,
    },
    IntegerChoice {
        #[serde(default = "default_false")]
        allow_null: bool,

        #[serde(default)]
        choices: Vec<ChoiceConfig>,
    },
}

/// Accepted spellings for a choice entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChoiceConfig {
    /// `3`: value labelled with itself
    Value(i64),
    /// `[3, "three"]`
    Pair(i64, String),
    /// `{ value = 3, label = "three" }`, or `{ label = "empty" }` for the empty option
    Labeled {
        #[serde(default)]
        value: Option<i64>,
        label: String,
    },
}

fn default_false() -> bool {
    false
}

impl From<&ChoiceConfig> for Choice {
    fn from(config: &ChoiceConfig) -> Self {
        match config {
            ChoiceConfig::Value(value) => Choice::from(*value),
            ChoiceConfig::Pair(value, label) => Choice::new(*value, label.clone()),
            ChoiceConfig::Labeled { value, label } => Choice::new(*value, label.clone()),
        }
    }
}

impl FieldConfig {
    /// Build the validator this entry describes
    pub fn build(&self) -> Field {
        match self {
            FieldConfig::Email { allow_null } => Email::new().allow_null(*allow_null).into(),
            FieldConfig::IntegerChoice {
                allow_null,
                choices,
            } => {
                let choices: Choices = choices.iter().map(Choice::from).collect();
                IntegerChoice::new(choices).allow_null(*allow_null).into()
            }
        }
    }
}

impl FormConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Failed to parse form config")
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form config: {:?}", path))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid form config: {:?}", path))?;

        tracing::debug!(path = ?path, fields = config.fields.len(), "loaded form config");
        Ok(config)
    }
}
