//! Inbound Ports (Driving Ports)
//!
//! Block identification and transaction aggregation for any block, genesis
//! or otherwise.

use shared_types::{BlockHeader, Hash, Transaction};

/// Hash engine API (Driving Port).
pub trait HashEngineApi: Send + Sync {
    /// Identifier of a block: double hash of its 209-byte encoded header.
    fn block_hash(&self, header: &BlockHeader) -> Hash;

    /// Identifier of a transaction: double hash of its encoding.
    fn tx_hash(&self, tx: &Transaction) -> Hash;

    /// Merkle root over the ordered transaction set.
    fn merkle_root(&self, transactions: &[Transaction]) -> Hash;
}
