//! # Shared Types Crate
//!
//! Entities shared by every layer of the genesis core:
//!
//! - **Chain entities** (`entities`): `BlockHeader`, `Block`, `Transaction`,
//!   `TxIn`, `TxOut`, `OutPoint`, `Hash`
//! - **Administrative threads** (`admin`): the closed `AdminThread` set and
//!   its fixed output scripts
//! - **Networks** (`network`): the `NetworkId` enumeration
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: field order and widths are declared once,
//!   here. The codec crate only walks these structs.
//! - **No Behaviour Beyond Identity**: encoding and hashing live in their own
//!   crates so this one stays dependency-light.

pub mod admin;
pub mod entities;
pub mod errors;
pub mod network;

pub use admin::AdminThread;
pub use entities::*;
pub use errors::*;
pub use network::NetworkId;
