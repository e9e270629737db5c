//! # Wire Codec Subsystem (pc-01)
//!
//! Lossless, deterministic translation between chain entities and their
//! canonical byte form.
//!
//! ## Wire Format
//!
//! - Fixed-width integers are little-endian.
//! - Counts and script lengths use the compact count encoding
//!   (`0xFD`/`0xFE`/`0xFF` markers for 2/4/8-byte values).
//! - Headers are always 209 bytes:
//!
//! ```text
//! version(4) prev_block(32) merkle_root(32) timestamp(8) bits(4)
//! height(4) size(4) nonce(8) validate_pub_key(33) validate_sig(80)
//! ```
//!
//! The format is versionless. Changing a field width or order changes every
//! block identifier on a launched network.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | INVARIANT-1 | `decode(encode(x)) == x` | `domain/encoding.rs` |
//! | INVARIANT-2 | `encoded_size(x) == encode(x).len()` | separate measuring walk |
//! | INVARIANT-3 | Header encodes to exactly 209 bytes | `BLOCK_HEADER_SIZE` |
//! | INVARIANT-4 | Compact counts are minimally encoded | `WireReader::read_compact_size` |
//! | INVARIANT-5 | Forged counts cannot force large allocations | `MAX_PAYLOAD_SIZE`, bounded capacity |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): pure encode/decode/measure
//! - **Ports Layer** (`ports/`): `WireCodecApi`
//! - **Service** (`service`): `WireCodecService`, adds decode-failure logging

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    compact_size_len, decode, decode_prefix, encode, encoded_size, write_compact_size,
    CodecError, CountDefect, Decodable, Encodable, WireReader, BLOCK_HEADER_SIZE,
    MAX_PAYLOAD_SIZE, OUTPOINT_SIZE,
};
pub use ports::WireCodecApi;
pub use service::WireCodecService;
