//! # Codec Errors
//!
//! Every decode failure is reported as a typed error naming the field being
//! read. Nothing is ever coerced to a default value.

use thiserror::Error;

/// Errors produced while decoding wire bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer bytes remain than the field requires.
    #[error("Truncated input reading {field}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// A compact count is missing its trailing bytes or is not minimally
    /// encoded.
    #[error("Malformed compact count for {field}: {defect}")]
    MalformedCount {
        field: &'static str,
        defect: CountDefect,
    },

    /// Bytes remain after a complete entity was decoded.
    #[error("Trailing bytes after {entity}: {remaining} unread")]
    TrailingBytes {
        entity: &'static str,
        remaining: usize,
    },

    /// A decoded count or length exceeds the payload ceiling.
    #[error("Oversized {field}: {count} exceeds maximum {max}")]
    Oversized {
        field: &'static str,
        count: u64,
        max: u64,
    },
}

/// What is wrong with a compact count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountDefect {
    /// The marker byte announces more bytes than are present.
    #[error("marker {marker:#04x} needs {needed} trailing bytes, {remaining} present")]
    MissingBytes {
        marker: u8,
        needed: usize,
        remaining: usize,
    },

    /// The value fits a shorter encoding than the one used.
    #[error("value {value} under marker {marker:#04x} is below minimum {min}")]
    NonCanonical { marker: u8, value: u64, min: u64 },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
