//! # Entity Encoding
//!
//! `Encodable` / `Decodable` implementations for every wire entity.
//!
//! Fields are written in declaration order with little-endian integers.
//! `encoded_size` is a separate measuring walk over the struct: it never
//! touches an encode buffer, so comparing it against a header's declared
//! `size` is a real check rather than a tautology.

use shared_types::{
    Block, BlockHeader, Hash, OutPoint, Transaction, TxIn, TxOut, HASH_SIZE, PUB_KEY_SIZE,
    SIGNATURE_SIZE,
};

use super::compact_size::{compact_size_len, write_compact_size};
use super::errors::{CodecError, Result};
use super::reader::WireReader;

/// Encoded header length: 4+32+32+8+4+4+4+8+33+80.
pub const BLOCK_HEADER_SIZE: usize = 4 // version
    + HASH_SIZE // prev_block
    + HASH_SIZE // merkle_root
    + 8 // timestamp
    + 4 // bits
    + 4 // height
    + 4 // size
    + 8 // nonce
    + PUB_KEY_SIZE
    + SIGNATURE_SIZE;

/// Encoded outpoint length.
pub const OUTPOINT_SIZE: usize = HASH_SIZE + 4;

// Smallest possible encodings, used to bound pre-allocation.
const MIN_TX_IN_SIZE: usize = OUTPOINT_SIZE + 1 + 4;
const MIN_TX_OUT_SIZE: usize = 8 + 1;
const MIN_TX_SIZE: usize = 4 + 1 + 1 + 4;

/// Types with a canonical wire encoding.
pub trait Encodable {
    /// Append the encoding of `self` to `out`.
    fn encode_to(&self, out: &mut Vec<u8>);

    /// Exact number of bytes `encode_to` appends.
    fn encoded_size(&self) -> usize;

    /// Encode into a fresh buffer.
    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_size());
        self.encode_to(&mut out);
        out
    }
}

/// Types that can be read back from their wire encoding.
pub trait Decodable: Sized {
    /// Name used in `TrailingBytes` errors.
    const ENTITY: &'static str;

    /// Read one value from the reader, advancing it.
    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self>;
}

/// Encode any entity.
pub fn encode<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    value.encode()
}

/// Exact encoded length of any entity.
pub fn encoded_size<T: Encodable + ?Sized>(value: &T) -> usize {
    value.encoded_size()
}

/// Decode an entity that must occupy the whole buffer.
pub fn decode<T: Decodable>(bytes: &[u8]) -> Result<T> {
    let mut reader = WireReader::new(bytes);
    let value = T::decode_from(&mut reader)?;
    if !reader.is_empty() {
        return Err(CodecError::TrailingBytes {
            entity: T::ENTITY,
            remaining: reader.remaining(),
        });
    }
    Ok(value)
}

/// Decode an entity from the front of a buffer, returning it and the number
/// of bytes consumed.
pub fn decode_prefix<T: Decodable>(bytes: &[u8]) -> Result<(T, usize)> {
    let mut reader = WireReader::new(bytes);
    let value = T::decode_from(&mut reader)?;
    Ok((value, reader.position()))
}

fn var_bytes_size(bytes: &[u8]) -> usize {
    compact_size_len(bytes.len() as u64) + bytes.len()
}

fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

fn list_size<T: Encodable>(items: &[T]) -> usize {
    compact_size_len(items.len() as u64) + items.iter().map(Encodable::encoded_size).sum::<usize>()
}

fn write_list<T: Encodable>(out: &mut Vec<u8>, items: &[T]) {
    write_compact_size(out, items.len() as u64);
    for item in items {
        item.encode_to(out);
    }
}

fn read_list<T: Decodable>(
    reader: &mut WireReader<'_>,
    field: &'static str,
    min_item_size: usize,
) -> Result<Vec<T>> {
    let count = reader.read_count(field)?;
    let mut items = Vec::with_capacity(reader.bounded_capacity(count, min_item_size));
    for _ in 0..count {
        items.push(T::decode_from(reader)?);
    }
    Ok(items)
}

// =============================================================================
// Identifiers
// =============================================================================

impl Encodable for Hash {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }

    fn encoded_size(&self) -> usize {
        HASH_SIZE
    }
}

impl Decodable for Hash {
    const ENTITY: &'static str = "hash";

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Hash(reader.read_array("hash")?))
    }
}

// =============================================================================
// Transactions
// =============================================================================

impl Encodable for OutPoint {
    fn encode_to(&self, out: &mut Vec<u8>) {
        self.hash.encode_to(out);
        out.extend_from_slice(&self.index.to_le_bytes());
    }

    fn encoded_size(&self) -> usize {
        OUTPOINT_SIZE
    }
}

impl Decodable for OutPoint {
    const ENTITY: &'static str = "outpoint";

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(OutPoint {
            hash: Hash(reader.read_array("outpoint.hash")?),
            index: reader.read_u32_le("outpoint.index")?,
        })
    }
}

impl Encodable for TxIn {
    fn encode_to(&self, out: &mut Vec<u8>) {
        self.previous_outpoint.encode_to(out);
        write_var_bytes(out, &self.signature_script);
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }

    fn encoded_size(&self) -> usize {
        OUTPOINT_SIZE + var_bytes_size(&self.signature_script) + 4
    }
}

impl Decodable for TxIn {
    const ENTITY: &'static str = "tx input";

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(TxIn {
            previous_outpoint: OutPoint::decode_from(reader)?,
            signature_script: reader.read_var_bytes("txin.signature_script")?,
            sequence: reader.read_u32_le("txin.sequence")?,
        })
    }
}

impl Encodable for TxOut {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_le_bytes());
        write_var_bytes(out, &self.pk_script);
    }

    fn encoded_size(&self) -> usize {
        8 + var_bytes_size(&self.pk_script)
    }
}

impl Decodable for TxOut {
    const ENTITY: &'static str = "tx output";

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(TxOut {
            value: reader.read_i64_le("txout.value")?,
            pk_script: reader.read_var_bytes("txout.pk_script")?,
        })
    }
}

impl Encodable for Transaction {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        write_list(out, &self.inputs);
        write_list(out, &self.outputs);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }

    fn encoded_size(&self) -> usize {
        4 + list_size(&self.inputs) + list_size(&self.outputs) + 4
    }
}

impl Decodable for Transaction {
    const ENTITY: &'static str = "transaction";

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Transaction {
            version: reader.read_i32_le("tx.version")?,
            inputs: read_list(reader, "tx.input_count", MIN_TX_IN_SIZE)?,
            outputs: read_list(reader, "tx.output_count", MIN_TX_OUT_SIZE)?,
            lock_time: reader.read_u32_le("tx.lock_time")?,
        })
    }
}

// =============================================================================
// Blocks
// =============================================================================

impl Encodable for BlockHeader {
    fn encode_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.prev_block.encode_to(out);
        self.merkle_root.encode_to(out);
        out.extend_from_slice(&self.timestamp.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.size.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
        out.extend_from_slice(&self.validate_pub_key);
        out.extend_from_slice(&self.validate_sig);
    }

    fn encoded_size(&self) -> usize {
        BLOCK_HEADER_SIZE
    }
}

impl Decodable for BlockHeader {
    const ENTITY: &'static str = "block header";

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(BlockHeader {
            version: reader.read_i32_le("header.version")?,
            prev_block: Hash(reader.read_array("header.prev_block")?),
            merkle_root: Hash(reader.read_array("header.merkle_root")?),
            timestamp: reader.read_u64_le("header.timestamp")?,
            bits: reader.read_u32_le("header.bits")?,
            height: reader.read_u32_le("header.height")?,
            size: reader.read_u32_le("header.size")?,
            nonce: reader.read_u64_le("header.nonce")?,
            validate_pub_key: reader.read_array("header.validate_pub_key")?,
            validate_sig: reader.read_array("header.validate_sig")?,
        })
    }
}

impl Encodable for Block {
    fn encode_to(&self, out: &mut Vec<u8>) {
        self.header.encode_to(out);
        write_list(out, &self.transactions);
    }

    fn encoded_size(&self) -> usize {
        self.header.encoded_size() + list_size(&self.transactions)
    }
}

impl Decodable for Block {
    const ENTITY: &'static str = "block";

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Block {
            header: BlockHeader::decode_from(reader)?,
            transactions: read_list(reader, "block.tx_count", MIN_TX_SIZE)?,
        })
    }
}
