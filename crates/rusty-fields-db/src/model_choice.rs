// File: src/model_choice.rs
// Purpose: Choice field whose options are rows from a live query

use async_trait::async_trait;
use rusty_fields::{parse_choice, AsyncValidator, Choice, Choices, ValidationError, Value};

use crate::error::{Error, Result};
use crate::queryset::{ChoiceRow, Queryset};

/// Integer field that must name one of the rows `queryset` returns.
///
/// The choice set is read from the queryset on every call, so it always
/// reflects the current rows and their query order.
#[derive(Debug, Clone)]
pub struct ModelChoice<Q> {
    queryset: Q,
    allow_null: bool,
}

impl<Q: Queryset> ModelChoice<Q> {
    pub fn new(queryset: Q) -> Self {
        Self {
            queryset,
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

    pub fn queryset(&self) -> &Q {
        &self.queryset
    }

    /// `(row.id, row.to_string())` for every row, in query order
    pub async fn choices(&self) -> Result<Vec<(i64, String)>> {
        let rows = self.queryset.fetch().await?;
        Ok(rows.iter().map(|row| (row.id(), row.to_string())).collect())
    }

    /// Current rows as a `Choices` set, ready for `render_select`
    pub async fn choice_set(&self) -> Result<Choices> {
        let choices = self.choices().await?;
        Ok(choices
            .into_iter()
            .map(|(id, label)| Choice::new(id, label))
            .collect())
    }

    /// Validate a submitted id against the rows the query returns right now.
    ///
    /// Bad input comes back as `Error::Invalid`; `Error::Query` means the
    /// rows could not be read. Input that is not an integer id is rejected
    /// without running the query.
    pub async fn validate_or_error(&self, raw: &Value) -> Result<Option<i64>> {
        let Some(id) = parse_choice(raw, self.allow_null)? else {
            return Ok(None);
        };

        let rows = self.queryset.fetch().await?;
        if rows.iter().any(|row| row.id() == id) {
            Ok(Some(id))
        } else {
            tracing::debug!(id, rows = rows.len(), "id is not among the current rows");
            Err(ValidationError::choice().into())
        }
    }
}

#[async_trait]
impl<Q: Queryset> AsyncValidator for ModelChoice<Q> {
    type Output = i64;
    type Error = Error;

    async fn validate_async(&self, raw: &Value) -> Result<Option<i64>> {
        self.validate_or_error(raw).await
    }
}
