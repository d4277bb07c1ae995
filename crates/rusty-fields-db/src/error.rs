//! Error type for database-backed fields

use rusty_fields::ValidationError;

/// Failure from a database-backed field.
///
/// `Invalid` is bad user input; the other variants mean the choice set could
/// not be read at all and should surface as a server error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("choice query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("invalid SQL identifier: {0:?}")]
    InvalidIdentifier(String),
}

impl Error {
    /// The validation error, if this is one
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
