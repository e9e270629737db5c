//! # Genesis Constants
//!
//! The four genesis blocks differ only in a handful of header constants and
//! the coinbase script, so they are kept as rows of one table and built by
//! one constructor.
//!
//! Every block carries a single coinbase transaction whose three outputs
//! anchor the administrative threads (Root, Provision, Issue), each with
//! value zero.

use hex_literal::hex;
use shared_types::{
    AdminThread, Block, BlockHeader, Hash, NetworkId, OutPoint, Transaction, TxIn, TxOut,
    MAX_TX_IN_SEQUENCE, PUB_KEY_SIZE, SIGNATURE_SIZE,
};

use super::params::FixtureStatus;

/// Header version shared by every genesis block.
pub const GENESIS_VERSION: i32 = 4;

/// 2017-03-29 22:09:00 UTC.
pub const GENESIS_TIMESTAMP: u64 = 0x58dc_307c;

/// Declared size of every genesis block.
pub const GENESIS_BLOCK_SIZE: u32 = 326;

/// Version of the genesis coinbase transaction.
pub const GENESIS_TX_VERSION: i32 = 1;

/// Literal per-network genesis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisConstants {
    pub network: NetworkId,
    pub merkle_root: [u8; 32],
    pub bits: u32,
    pub nonce: u64,
    pub coinbase_script: [u8; 32],
    /// Expected block identifier, in hash-function byte order.
    pub expected_hash: [u8; 32],
    pub fixture_status: FixtureStatus,
}

// Regtest, testnet and simnet share one coinbase payload and merkle root.
const TEST_MERKLE_ROOT: [u8; 32] =
    hex!("d7b2c8b0fa10c8ba601b0c80cc1b3a2af6205f5f6fc1ecafecae26de013ea8ba");
const TEST_COINBASE_SCRIPT: [u8; 32] =
    hex!("0000000000000000003580857be175c7d577b85db2e006d5b8914e64abb7871c");

pub const MAIN_NET_GENESIS: GenesisConstants = GenesisConstants {
    network: NetworkId::Main,
    merkle_root: hex!("b1725ea8f4c20ed74fdd511c4a65a00697388b91b0e558e02ed047f13c47ee67"),
    bits: 0x1d00_ffff,
    nonce: 0xab82_1115,
    coinbase_script: hex!("8e5bd1f4c90b80d8f3122bf4629a8821c36a706d4cb18ba9a7a5e9a587ee48fe"),
    expected_hash: hex!("4de92d3e6afc0e77123088a1473f93ee5b7569b9b59de94c14dbe968c2301068"),
    fixture_status: FixtureStatus::Final,
};

/// Pending replacement bytes; see `FixtureStatus::Provisional`.
pub const REGTEST_GENESIS: GenesisConstants = GenesisConstants {
    network: NetworkId::Regtest,
    merkle_root: TEST_MERKLE_ROOT,
    bits: 0x200f_0f0f,
    nonce: 9,
    coinbase_script: TEST_COINBASE_SCRIPT,
    expected_hash: hex!("7793e05c44bd8e74560a66ebf2692ee2791c07b8890ae5206b9f5b199c22ffaa"),
    fixture_status: FixtureStatus::Provisional,
};

pub const TEST_NET_GENESIS: GenesisConstants = GenesisConstants {
    network: NetworkId::Testnet,
    merkle_root: TEST_MERKLE_ROOT,
    bits: 0x2007_ffff,
    nonce: 1,
    coinbase_script: TEST_COINBASE_SCRIPT,
    expected_hash: hex!("2bcaa7af07b316add728b8c12eea1b59c62a01ca0fc4a667e52e140684d9fbb7"),
    fixture_status: FixtureStatus::Final,
};

pub const SIM_NET_GENESIS: GenesisConstants = GenesisConstants {
    network: NetworkId::Simnet,
    merkle_root: TEST_MERKLE_ROOT,
    bits: 0x207f_ffff,
    nonce: 2,
    coinbase_script: TEST_COINBASE_SCRIPT,
    expected_hash: hex!("7f6a7831d7a6690019e1e4ca65d0791204a605064aff1e00b0d9935d2c18ca0c"),
    fixture_status: FixtureStatus::Final,
};

/// Table row for a network.
pub fn genesis_constants(network: NetworkId) -> &'static GenesisConstants {
    match network {
        NetworkId::Main => &MAIN_NET_GENESIS,
        NetworkId::Regtest => &REGTEST_GENESIS,
        NetworkId::Testnet => &TEST_NET_GENESIS,
        NetworkId::Simnet => &SIM_NET_GENESIS,
    }
}

/// The coinbase transaction that opens the administrative threads.
pub fn genesis_coinbase(coinbase_script: &[u8]) -> Transaction {
    Transaction {
        version: GENESIS_TX_VERSION,
        inputs: vec![TxIn {
            previous_outpoint: OutPoint::coinbase(),
            signature_script: coinbase_script.to_vec(),
            sequence: MAX_TX_IN_SEQUENCE,
        }],
        outputs: AdminThread::ALL.into_iter().map(TxOut::admin_thread).collect(),
        lock_time: 0,
    }
}

/// Build a network's genesis block from its constants.
pub fn build_genesis_block(constants: &GenesisConstants) -> Block {
    Block {
        header: BlockHeader {
            version: GENESIS_VERSION,
            prev_block: Hash::ZERO,
            merkle_root: Hash(constants.merkle_root),
            timestamp: GENESIS_TIMESTAMP,
            bits: constants.bits,
            height: 0,
            size: GENESIS_BLOCK_SIZE,
            nonce: constants.nonce,
            validate_pub_key: [0u8; PUB_KEY_SIZE],
            validate_sig: [0u8; SIGNATURE_SIZE],
        },
        transactions: vec![genesis_coinbase(&constants.coinbase_script)],
    }
}
