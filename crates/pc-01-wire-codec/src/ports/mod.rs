//! # Ports Layer
//!
//! Inbound API trait implemented by the codec service.

pub mod inbound;

pub use inbound::WireCodecApi;
