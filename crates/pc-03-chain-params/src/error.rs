//! Error types for the network parameter registry

use std::fmt;

use pc_01_wire_codec::CodecError;
use shared_types::{AdminThread, Hash, NetworkId, NetworkParseError};
use thiserror::Error;

/// One failed genesis check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    #[error("Block size mismatch: header declares {declared}, encoding is {computed} bytes")]
    SizeMismatch { declared: u32, computed: usize },

    #[error("Genesis hash mismatch: expected {expected}, computed {actual}")]
    HashMismatch { expected: Hash, actual: Hash },

    #[error(
        "Round-trip mismatch: {} bytes encoded, {} bytes re-encoded, first difference at offset {}",
        .original.len(),
        .reencoded.len(),
        first_difference(.original, .reencoded)
    )]
    RoundTripMismatch { original: Vec<u8>, reencoded: Vec<u8> },

    #[error("Genesis must carry exactly one transaction, found {count}")]
    GenesisTxCount { count: usize },

    #[error("Genesis transaction must have 3 admin outputs, found {actual}")]
    AdminOutputCount { actual: usize },

    #[error("Admin output {index} should be the {expected} thread, script is {found_script}")]
    AdminThreadOrder {
        index: usize,
        expected: AdminThread,
        found_script: String,
    },

    #[error("Admin output for the {thread} thread carries value {value}, expected 0")]
    AdminThreadValue { thread: AdminThread, value: i64 },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

impl VerificationFailure {
    /// Side-by-side hex dumps for failures that carry raw bytes.
    pub fn dump(&self) -> Option<String> {
        match self {
            VerificationFailure::RoundTripMismatch {
                original,
                reencoded,
            } => Some(format!(
                "encoded:\n{}re-encoded:\n{}",
                hex_dump(original),
                hex_dump(reencoded)
            )),
            _ => None,
        }
    }
}

/// Every failed check for one network's genesis definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub network: NetworkId,
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn contains(&self, predicate: impl Fn(&VerificationFailure) -> bool) -> bool {
        self.failures.iter().any(predicate)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Genesis verification failed for {}: {} check(s) failed",
            self.network,
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n  - {failure}")?;
            if let Some(dump) = failure.dump() {
                for line in dump.lines() {
                    write!(f, "\n      {line}")?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for VerificationReport {}

/// Errors from loading registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}: {source}")]
    UnknownNetwork {
        key: &'static str,
        #[source]
        source: NetworkParseError,
    },

    #[error("{key}: expected a boolean, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

/// Render bytes sixteen to a line with offsets.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3 + bytes.len() / 16 * 8);
    for (row, chunk) in bytes.chunks(16).enumerate() {
        out.push_str(&format!("{:08x}  {}\n", row * 16, hex::encode(chunk)));
    }
    out
}

fn first_difference(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .unwrap_or_else(|| a.len().min(b.len()))
}
