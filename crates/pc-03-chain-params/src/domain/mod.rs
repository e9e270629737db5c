//! # Domain Layer
//!
//! Genesis constants, the `NetworkParams` bundle and the checks run against
//! it. Encoding and hashing are delegated to pc-01 and pc-02.

pub mod genesis;
pub mod params;
pub mod verification;

pub use genesis::{
    build_genesis_block, genesis_coinbase, genesis_constants, GenesisConstants,
    GENESIS_BLOCK_SIZE, GENESIS_TIMESTAMP, GENESIS_TX_VERSION, GENESIS_VERSION,
    MAIN_NET_GENESIS, REGTEST_GENESIS, SIM_NET_GENESIS, TEST_NET_GENESIS,
};
pub use params::{FixtureStatus, NetworkParams};
pub use verification::{check_admin_threads, verify, GenesisVerifier};
