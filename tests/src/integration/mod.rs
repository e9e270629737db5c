//! Cross-crate scenarios: codec, hash engine and registry against the
//! literal genesis fixtures.

pub mod end_to_end;
pub mod genesis_vectors;
