//! # Wire Codec Service
//!
//! Implements `WireCodecApi` over the pure domain functions and logs decode
//! failures with the offending field.

use shared_types::{Block, BlockHeader, Transaction};
use tracing::debug;

use crate::domain::{self, CodecError, Decodable, Result};
use crate::ports::WireCodecApi;

/// Stateless codec service.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireCodecService;

impl WireCodecService {
    pub fn new() -> Self {
        Self
    }

    fn decode_logged<T: Decodable>(&self, bytes: &[u8]) -> Result<T> {
        domain::decode::<T>(bytes).inspect_err(|err: &CodecError| {
            debug!(entity = T::ENTITY, len = bytes.len(), error = %err, "Wire decode failed");
        })
    }
}

impl WireCodecApi for WireCodecService {
    fn encode_block(&self, block: &Block) -> Vec<u8> {
        domain::encode(block)
    }

    fn decode_block(&self, bytes: &[u8]) -> Result<Block> {
        self.decode_logged(bytes)
    }

    fn block_size(&self, block: &Block) -> usize {
        domain::encoded_size(block)
    }

    fn encode_header(&self, header: &BlockHeader) -> Vec<u8> {
        domain::encode(header)
    }

    fn decode_header(&self, bytes: &[u8]) -> Result<BlockHeader> {
        self.decode_logged(bytes)
    }

    fn encode_transaction(&self, tx: &Transaction) -> Vec<u8> {
        domain::encode(tx)
    }

    fn decode_transaction(&self, bytes: &[u8]) -> Result<Transaction> {
        self.decode_logged(bytes)
    }
}
