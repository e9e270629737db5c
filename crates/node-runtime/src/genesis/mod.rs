//! Genesis verification at startup.

pub mod gate;

pub use gate::{bootstrap, ChainIdentity, InvalidGenesis};
