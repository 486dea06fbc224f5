//! Error types for pattern compilation and configuration.
//!
//! The merge engine itself never fails; errors only arise while building
//! pattern sets or parsing user-facing configuration.

use thiserror::Error;

/// Result type for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Neither `regex` nor `fancy-regex` accepted the pattern.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The pattern matches the empty string and would produce zero-length
    /// occurrences.
    #[error("pattern `{pattern}` matches the empty string")]
    EmptyMatch { pattern: String },

    /// A family name that is not one of the built-in entity types.
    #[error("unknown entity family `{0}`")]
    UnknownFamily(String),
}
