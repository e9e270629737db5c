//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod sha256d;

pub use sha256d::Sha256dHasher;
