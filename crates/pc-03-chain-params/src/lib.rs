//! # Chain Parameters Subsystem (pc-03)
//!
//! The network parameter registry: one immutable genesis definition per
//! network, and the checks that prove each definition is self-consistent.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | INVARIANT-1 | `decode(encode(genesis)) == genesis` | `GenesisVerifier::verify` |
//! | INVARIANT-2 | `block_hash(genesis.header) == genesis_hash` | `GenesisVerifier::verify` |
//! | INVARIANT-3 | `encoded_size(genesis) == genesis.header.size` | `GenesisVerifier::verify` |
//! | INVARIANT-4 | Admin outputs are Root, Provision, Issue, value 0 | `check_admin_threads` |
//! | INVARIANT-5 | Parameters are built once and never mutated | `LazyLock` statics in `registry` |
//!
//! Verification never stops at the first failure; the returned
//! `VerificationReport` names every broken invariant.
//!
//! ## Usage
//!
//! ```no_run
//! use pc_03_chain_params::{params, verify};
//! use shared_types::NetworkId;
//!
//! let main = params(NetworkId::Main);
//! verify(main).expect("mainnet genesis is valid");
//! println!("{}", main.genesis_hash);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod registry;

pub use config::ChainParamsConfig;
pub use domain::{
    build_genesis_block, check_admin_threads, genesis_coinbase, genesis_constants, verify,
    FixtureStatus, GenesisConstants, GenesisVerifier, NetworkParams, GENESIS_BLOCK_SIZE,
    GENESIS_TIMESTAMP, GENESIS_TX_VERSION, GENESIS_VERSION,
};
pub use error::{hex_dump, ConfigError, VerificationFailure, VerificationReport};
pub use registry::{all, params, verify_all};
