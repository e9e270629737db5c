//! # Compact Count Encoding
//!
//! Variable-length unsigned integer used for every count and script length.
//!
//! | Value range | Encoding |
//! |-------------|----------|
//! | `0 ..= 0xFC` | one byte |
//! | `0xFD ..= 0xFFFF` | `0xFD` + u16 LE |
//! | `0x1_0000 ..= 0xFFFF_FFFF` | `0xFE` + u32 LE |
//! | larger | `0xFF` + u64 LE |
//!
//! Decoding insists on the shortest form (see `WireReader::read_compact_size`).

/// Marker for a 2-byte value.
pub const MARKER_U16: u8 = 0xfd;
/// Marker for a 4-byte value.
pub const MARKER_U32: u8 = 0xfe;
/// Marker for an 8-byte value.
pub const MARKER_U64: u8 = 0xff;

/// Bytes `write_compact_size` will emit for `value`.
pub const fn compact_size_len(value: u64) -> usize {
    if value < MARKER_U16 as u64 {
        1
    } else if value <= u16::MAX as u64 {
        3
    } else if value <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

/// Append the compact encoding of `value`.
pub fn write_compact_size(out: &mut Vec<u8>, value: u64) {
    if value < MARKER_U16 as u64 {
        out.push(value as u8);
    } else if value <= u16::MAX as u64 {
        out.push(MARKER_U16);
        out.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= u32::MAX as u64 {
        out.push(MARKER_U32);
        out.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        out.push(MARKER_U64);
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Trailing byte count and smallest legal value for a marker byte, or `None`
/// when the byte is a value on its own.
pub(crate) const fn marker_width(marker: u8) -> Option<(usize, u64)> {
    match marker {
        MARKER_U16 => Some((2, MARKER_U16 as u64)),
        MARKER_U32 => Some((4, u16::MAX as u64 + 1)),
        MARKER_U64 => Some((8, u32::MAX as u64 + 1)),
        _ => None,
    }
}
