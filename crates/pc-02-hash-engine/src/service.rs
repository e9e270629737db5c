//! # Hash Engine Service
//!
//! Implements `HashEngineApi` by encoding through the wire codec and hashing
//! through the injected `DoubleHasher`.

use pc_01_wire_codec::{encode, BLOCK_HEADER_SIZE};
use shared_types::{BlockHeader, Hash, Transaction};
use tracing::trace;

use crate::adapters::Sha256dHasher;
use crate::domain::MerkleTree;
use crate::ports::{DoubleHasher, HashEngineApi};

/// Hash engine generic over the hash primitive.
#[derive(Debug, Clone, Default)]
pub struct HashEngine<H: DoubleHasher = Sha256dHasher> {
    hasher: H,
}

impl HashEngine<Sha256dHasher> {
    /// Engine over double SHA-256.
    pub fn new() -> Self {
        Self::with_hasher(Sha256dHasher)
    }
}

impl<H: DoubleHasher> HashEngine<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Full Merkle tree over the transactions' hashes.
    pub fn merkle_tree(&self, transactions: &[Transaction]) -> MerkleTree {
        let leaves = transactions.iter().map(|tx| self.tx_hash(tx)).collect();
        MerkleTree::build(&self.hasher, leaves)
    }
}

impl<H: DoubleHasher> HashEngineApi for HashEngine<H> {
    fn block_hash(&self, header: &BlockHeader) -> Hash {
        let bytes = encode(header);
        debug_assert_eq!(bytes.len(), BLOCK_HEADER_SIZE);
        let hash = self.hasher.double_hash(&bytes);
        trace!(height = header.height, block_hash = %hash, "Computed block hash");
        hash
    }

    fn tx_hash(&self, tx: &Transaction) -> Hash {
        self.hasher.double_hash(&encode(tx))
    }

    fn merkle_root(&self, transactions: &[Transaction]) -> Hash {
        self.merkle_tree(transactions).root()
    }
}
