//! # Domain Layer
//!
//! Pure encoding logic for the wire codec. No I/O and no logging; the
//! service layer adds observability on top.

pub mod compact_size;
pub mod encoding;
pub mod errors;
pub mod reader;

pub use compact_size::{compact_size_len, write_compact_size};
pub use encoding::*;
pub use errors::*;
pub use reader::{WireReader, MAX_PAYLOAD_SIZE};
