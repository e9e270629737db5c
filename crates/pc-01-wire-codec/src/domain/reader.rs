//! # Wire Reader
//!
//! Cursor over an immutable byte slice. Every read names the field it is
//! reading so errors point at the exact spot the input went wrong.

use super::compact_size::marker_width;
use super::errors::{CodecError, CountDefect, Result};

/// Ceiling for any decoded count or byte length (32 MiB).
pub const MAX_PAYLOAD_SIZE: u64 = 32 * 1024 * 1024;

/// Forward-only reader over wire bytes.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::Truncated {
                field,
                needed: n,
                remaining,
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Take exactly `N` bytes as an array.
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, field)?);
        Ok(out)
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.read_array::<1>(field)?[0])
    }

    pub fn read_u32_le(&mut self, field: &'static str) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array(field)?))
    }

    pub fn read_i32_le(&mut self, field: &'static str) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array(field)?))
    }

    pub fn read_u64_le(&mut self, field: &'static str) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array(field)?))
    }

    pub fn read_i64_le(&mut self, field: &'static str) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_array(field)?))
    }

    /// Read a compact count.
    ///
    /// An empty input is `Truncated`; a marker without its trailing bytes or
    /// a value that fits a shorter form is `MalformedCount`.
    pub fn read_compact_size(&mut self, field: &'static str) -> Result<u64> {
        let marker = self.read_u8(field)?;
        let Some((width, min)) = marker_width(marker) else {
            return Ok(u64::from(marker));
        };

        let remaining = self.remaining();
        if remaining < width {
            return Err(CodecError::MalformedCount {
                field,
                defect: CountDefect::MissingBytes {
                    marker,
                    needed: width,
                    remaining,
                },
            });
        }

        let mut le = [0u8; 8];
        le[..width].copy_from_slice(self.read_bytes(width, field)?);
        let value = u64::from_le_bytes(le);

        if value < min {
            return Err(CodecError::MalformedCount {
                field,
                defect: CountDefect::NonCanonical { marker, value, min },
            });
        }
        Ok(value)
    }

    /// Read a compact count that will size an allocation, rejecting values
    /// above `MAX_PAYLOAD_SIZE`.
    pub fn read_count(&mut self, field: &'static str) -> Result<usize> {
        let count = self.read_compact_size(field)?;
        if count > MAX_PAYLOAD_SIZE {
            return Err(CodecError::Oversized {
                field,
                count,
                max: MAX_PAYLOAD_SIZE,
            });
        }
        Ok(count as usize)
    }

    /// Read a count-prefixed byte string.
    pub fn read_var_bytes(&mut self, field: &'static str) -> Result<Vec<u8>> {
        let len = self.read_count(field)?;
        Ok(self.read_bytes(len, field)?.to_vec())
    }

    /// Capacity to reserve for `count` items of at least `min_item_size`
    /// bytes each, bounded by what the input could actually hold.
    pub(crate) fn bounded_capacity(&self, count: usize, min_item_size: usize) -> usize {
        count.min(self.remaining() / min_item_size.max(1))
    }
}
