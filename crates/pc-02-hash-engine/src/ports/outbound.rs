//! Outbound Ports (Driven Ports)
//!
//! The double-hash primitive is consumed, not owned, by the engine. Any
//! implementation must be a pure function of its input bytes.

use shared_types::Hash;

/// Double cryptographic hash (Driven Port).
pub trait DoubleHasher: Send + Sync {
    /// `H(H(data))`.
    fn double_hash(&self, data: &[u8]) -> Hash;

    /// `H(H(left || right))`, the Merkle interior node operation.
    fn double_hash_pair(&self, left: &Hash, right: &Hash) -> Hash {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(left.as_bytes());
        buf[32..].copy_from_slice(right.as_bytes());
        self.double_hash(&buf)
    }
}
