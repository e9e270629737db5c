//! # Hash Engine Subsystem (pc-02)
//!
//! Content-addressed identifiers for blocks and transactions, and the
//! Merkle root binding a block's transaction set to its header.
//!
//! ## Rules
//!
//! - **Block hash**: double SHA-256 of the 209-byte encoded header. The
//!   transactions are not hashed directly; the header's merkle root vouches
//!   for them.
//! - **Tx hash**: double SHA-256 of the encoded transaction.
//! - **Merkle root**: one tx → its hash; otherwise pairwise double hashes
//!   bottom-up with the last node of an odd level paired with itself.
//!
//! All functions are pure: same bytes in, same digest out, on any thread.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): `MerkleTree`
//! - **Ports Layer** (`ports/`): `HashEngineApi` (inbound), `DoubleHasher` (outbound)
//! - **Adapters Layer** (`adapters/`): `Sha256dHasher`
//! - **Service** (`service`): `HashEngine`

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::Sha256dHasher;
pub use domain::MerkleTree;
pub use ports::{DoubleHasher, HashEngineApi};
pub use service::HashEngine;
