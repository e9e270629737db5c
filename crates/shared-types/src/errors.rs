//! # Error Types
//!
//! Parse errors for the identifier types defined in this crate.

use thiserror::Error;

/// Failure parsing a hash from its hex form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashParseError {
    /// Wrong number of hex characters.
    #[error("Invalid hash length: expected {expected} hex chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Not valid hexadecimal.
    #[error("Invalid hash hex: {0}")]
    InvalidHex(String),
}

/// Unknown network name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown network: {0}")]
pub struct NetworkParseError(pub String);
