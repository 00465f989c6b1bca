//! Error types for interactive word-frequency queries.

use thiserror::Error;

/// Errors raised by session commands.
///
/// Every variant is recoverable: the caller reports it and the session
/// continues with its state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("No input given")]
    EmptyInput,

    #[error("'{0}' does not contain a countable word")]
    EmptyWord(String),

    #[error("Not a valid number: {0}")]
    InvalidNumber(String),

    #[error("Unable to display {0} words, the limit must be at least 1")]
    NonPositiveLimit(i64),

    #[error("'{0}' is already in the exclude list")]
    AlreadyExcluded(String),

    #[error("'{0}' is not in the exclude list")]
    NotExcluded(String),

    #[error("'{0}' does not appear in the list")]
    WordNotFound(String),

    #[error("Not a valid menu option: {0}")]
    UnknownChoice(String),
}

/// Result type for session operations.
pub type TallyResult<T> = Result<T, TallyError>;

impl TallyError {
    /// Whether the error comes from malformed user input rather than a query miss.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::WordNotFound(_))
    }
}
