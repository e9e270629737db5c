//! # Domain Layer
//!
//! Merkle tree construction over an injected double-hash primitive.

pub mod merkle;

pub use merkle::MerkleTree;
