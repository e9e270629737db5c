//! Inbound Ports (Driving Ports)
//!
//! The API that the hash engine, the parameter registry and any later
//! chain-validation layer use to move entities to and from wire bytes.

use shared_types::{Block, BlockHeader, Transaction};

use crate::domain::Result;

/// Wire codec API (Driving Port).
pub trait WireCodecApi: Send + Sync {
    /// Encode a block.
    fn encode_block(&self, block: &Block) -> Vec<u8>;

    /// Decode a block that occupies the whole buffer.
    fn decode_block(&self, bytes: &[u8]) -> Result<Block>;

    /// Exact encoded length of a block, measured without encoding it.
    fn block_size(&self, block: &Block) -> usize;

    /// Encode a header (always 209 bytes).
    fn encode_header(&self, header: &BlockHeader) -> Vec<u8>;

    /// Decode a header from a buffer of exactly 209 bytes.
    fn decode_header(&self, bytes: &[u8]) -> Result<BlockHeader>;

    /// Encode a transaction.
    fn encode_transaction(&self, tx: &Transaction) -> Vec<u8>;

    /// Decode a transaction that occupies the whole buffer.
    fn decode_transaction(&self, bytes: &[u8]) -> Result<Transaction>;
}
