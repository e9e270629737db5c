//! Double SHA-256 adapter backed by the `sha2` crate.

use sha2::{Digest, Sha256};
use shared_types::Hash;

use crate::ports::DoubleHasher;

/// `SHA-256(SHA-256(data))`, the chain's identifier hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256dHasher;

/// One round of SHA-256.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Two rounds of SHA-256.
#[inline]
pub fn sha256d(data: &[u8]) -> Hash {
    Hash(sha256(&sha256(data)))
}

impl DoubleHasher for Sha256dHasher {
    fn double_hash(&self, data: &[u8]) -> Hash {
        sha256d(data)
    }
}
