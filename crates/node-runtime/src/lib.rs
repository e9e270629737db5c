//! # Node Runtime Library
//!
//! The startup gate of a Permissioned-Chain node, exposed as a library so it
//! can be tested without spawning the binary.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (`pc-telemetry`)
//! 2. Load the chain parameter configuration (`PC_NETWORK`, `PC_VERIFY_ALL`)
//! 3. Verify the selected genesis definition, or every network's
//! 4. Log the chain identity, or exit non-zero with every failed check

pub mod genesis;

pub use genesis::{bootstrap, ChainIdentity, InvalidGenesis};
