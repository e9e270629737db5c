//! # Ports Layer
//!
//! - **Inbound** (`HashEngineApi`): what callers use to identify blocks
//! - **Outbound** (`DoubleHasher`): the hash primitive this crate consumes

pub mod inbound;
pub mod outbound;

pub use inbound::HashEngineApi;
pub use outbound::DoubleHasher;
