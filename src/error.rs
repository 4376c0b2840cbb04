//! Error types for deployenv operations

use thiserror::Error;

/// Errors returned by strict environment parsing
///
/// The lenient [`Environment::parse`](crate::Environment::parse) never
/// surfaces this; it logs and falls back to production instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid environment '{input}', expected one of PROD, STAGE, DEV")]
    Unrecognized {
        /// The input exactly as supplied, before trimming
        input: String,
    },
}

/// A type alias for `Result<T, ParseError>`
pub type Result<T> = std::result::Result<T, ParseError>;
