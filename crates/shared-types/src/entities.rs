//! # Core Domain Entities
//!
//! Block, header and transaction records in their wire field order.
//!
//! ## Clusters
//!
//! - **Identifiers**: `Hash`
//! - **Chain**: `BlockHeader`, `Block`
//! - **Transactions**: `OutPoint`, `TxIn`, `TxOut`, `Transaction`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::admin::AdminThread;
use crate::errors::HashParseError;

// =============================================================================
// CLUSTER A: IDENTIFIERS
// =============================================================================

/// Length in bytes of every digest on the chain.
pub const HASH_SIZE: usize = 32;

/// Length in bytes of a compressed secp256k1 public key.
pub const PUB_KEY_SIZE: usize = 33;

/// Length in bytes of the administrative header signature field (two
/// 40-byte halves).
pub const SIGNATURE_SIZE: usize = 80;

/// A 32-byte digest (block identifier, tx identifier, merkle node).
///
/// Bytes are stored in the order the hash function produced them. The
/// human-readable form reverses them, which is how block explorers and the
/// rest of the tooling print identifiers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Hash(pub [u8; HASH_SIZE]);

impl Hash {
    /// The all-zero hash (genesis parent, coinbase outpoint).
    pub const ZERO: Hash = Hash([0u8; HASH_SIZE]);

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes in hash-function order.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl FromStr for Hash {
    type Err = HashParseError;

    /// Parse the byte-reversed hex form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH_SIZE * 2 {
            return Err(HashParseError::InvalidLength {
                expected: HASH_SIZE * 2,
                actual: s.len(),
            });
        }
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// CLUSTER B: THE CHAIN
// =============================================================================

/// Block header.
///
/// Extends the classic header with `height`, the declared block `size`, a
/// widened `nonce` and the administrative key/signature pair. Always 209
/// bytes on the wire.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Consensus rule version.
    pub version: i32,
    /// Identifier of the parent block; zero for genesis.
    pub prev_block: Hash,
    /// Merkle root over the block's transactions.
    pub merkle_root: Hash,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    /// Compact difficulty target.
    pub bits: u32,
    /// Position in the chain; zero for genesis.
    pub height: u32,
    /// Declared serialized length of the whole block, header included.
    pub size: u32,
    /// Proof-of-work search counter.
    pub nonce: u64,
    /// Compressed key of the administrative signer. Zero only for genesis.
    #[serde_as(as = "Bytes")]
    pub validate_pub_key: [u8; PUB_KEY_SIZE],
    /// Administrative signature over the preceding header bytes. Zero only
    /// for genesis.
    #[serde_as(as = "Bytes")]
    pub validate_sig: [u8; SIGNATURE_SIZE],
}

impl Default for BlockHeader {
    fn default() -> Self {
        Self {
            version: 0,
            prev_block: Hash::ZERO,
            merkle_root: Hash::ZERO,
            timestamp: 0,
            bits: 0,
            height: 0,
            size: 0,
            nonce: 0,
            validate_pub_key: [0u8; PUB_KEY_SIZE],
            validate_sig: [0u8; SIGNATURE_SIZE],
        }
    }
}

impl BlockHeader {
    /// Whether the administrative key and signature are both unset, which
    /// only a self-authorizing genesis header may be.
    pub fn is_unsigned(&self) -> bool {
        self.validate_pub_key.iter().all(|b| *b == 0) && self.validate_sig.iter().all(|b| *b == 0)
    }
}

/// A block: header plus ordered transactions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

// =============================================================================
// CLUSTER C: TRANSACTIONS
// =============================================================================

/// Index value marking a coinbase outpoint.
pub const COINBASE_INDEX: u32 = u32::MAX;

/// Sequence number meaning "final".
pub const MAX_TX_IN_SEQUENCE: u32 = u32::MAX;

/// Reference to an output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    /// Outpoint spent by coinbase inputs: zero hash, index `0xFFFFFFFF`.
    pub const fn coinbase() -> Self {
        Self {
            hash: Hash::ZERO,
            index: COINBASE_INDEX,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.index == COINBASE_INDEX && self.hash.is_zero()
    }
}

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_outpoint: OutPoint,
    pub signature_script: Vec<u8>,
    pub sequence: u32,
}

/// Transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxOut {
    pub value: i64,
    pub pk_script: Vec<u8>,
}

impl TxOut {
    /// Zero-value output carrying an administrative thread marker.
    pub fn admin_thread(thread: AdminThread) -> Self {
        Self {
            value: 0,
            pk_script: thread.script().to_vec(),
        }
    }

    /// The thread this output anchors, if its script is a thread marker.
    pub fn as_admin_thread(&self) -> Option<AdminThread> {
        AdminThread::from_script(&self.pk_script)
    }
}

/// Transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// A coinbase transaction has exactly one input spending the coinbase
    /// outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_outpoint.is_coinbase()
    }
}
