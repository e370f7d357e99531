//! Error types for langgen-core.
//!
//! Extraction itself never fails: malformed or partial rows degrade to
//! fewer fields. These errors cover the edges around it.

use thiserror::Error;

/// Result type alias using the crate-level Error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error(transparent)]
    Anki(#[from] AnkiError),
}

/// Errors picking an option from the numbered menu.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no options to choose from")]
    Empty,

    #[error("invalid choice {number}: enter a number between 1 and {max}")]
    OutOfRange { number: usize, max: usize },

    #[error("invalid input {input:?}: enter a number")]
    NotANumber { input: String },
}

/// Errors validating a language code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unknown language code: {0}")]
    Unknown(String),
}

/// Errors reported inside an AnkiConnect reply.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnkiError {
    #[error("AnkiConnect rejected the request: {0}")]
    Rejected(String),

    #[error("AnkiConnect returned neither a result nor an error")]
    MissingResult,
}
