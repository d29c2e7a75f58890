//! Error types for the syllogism analyzer.
//!
//! Analysis itself never fails: every syllogism receives a [`Verdict`](crate::Verdict).
//! These errors cover construction of terms, propositions and syllogisms, and
//! the loading of configuration and input files.

use thiserror::Error;

/// A specialized `Result` type for syllogism operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Defines the errors that can occur while building or loading syllogisms.
#[derive(Error, Debug)]
pub enum Error {
    /// A term was empty or consisted only of whitespace.
    #[error("Invalid term: {0:?}")]
    InvalidTerm(String),

    /// A proposition could not be parsed from its compact notation.
    #[error("Invalid proposition: {0}")]
    InvalidProposition(String),

    /// A form letter, mood or form label was not recognised.
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// A syllogism was built without one of its three propositions.
    #[error("Missing proposition: {0}")]
    MissingProposition(&'static str),

    /// Configuration could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error while reading input or configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during data serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
