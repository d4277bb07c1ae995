// File: src/choices.rs
// Purpose: Ordered (value, label) choice sets

use serde::{Deserialize, Serialize};

/// A single selectable option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// `None` marks an explicit "empty" option
    pub value: Option<i64>,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<Option<i64>>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<i64> for Choice {
    fn from(value: i64) -> Self {
        Choice::new(value, value.to_string())
    }
}

impl From<i32> for Choice {
    fn from(value: i32) -> Self {
        Choice::from(value as i64)
    }
}

impl<L: Into<String>> From<(i64, L)> for Choice {
    fn from((value, label): (i64, L)) -> Self {
        Choice::new(value, label)
    }
}

impl<L: Into<String>> From<(i32, L)> for Choice {
    fn from((value, label): (i32, L)) -> Self {
        Choice::new(value as i64, label)
    }
}

impl<L: Into<String>> From<(Option<i64>, L)> for Choice {
    fn from((value, label): (Option<i64>, L)) -> Self {
        Choice::new(value, label)
    }
}

/// Ordered collection of choices; order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Choices(Vec<Choice>);

impl Choices {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self(choices)
    }

    /// True if `value` is one of the non-empty choice values
    pub fn contains(&self, value: i64) -> bool {
        self.0.iter().any(|c| c.value == Some(value))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `(value, label)` pairs in order
    pub fn pairs(&self) -> Vec<(Option<i64>, &str)> {
        self.0.iter().map(|c| (c.value, c.label.as_str())).collect()
    }
}

impl<C: Into<Choice>> FromIterator<C> for Choices {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<Choice>> From<Vec<C>> for Choices {
    fn from(items: Vec<C>) -> Self {
        items.into_iter().collect()
    }
}

impl<C: Into<Choice>, const N: usize> From<[C; N]> for Choices {
    fn from(items: [C; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Choices {
    type Item = &'a Choice;
    type IntoIter = std::slice::Iter<'a, Choice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
