//! # Parameter Registry
//!
//! One `NetworkParams` per network, built on first access and shared
//! read-only for the life of the process.

use std::sync::LazyLock;

use shared_types::NetworkId;
use tracing::debug;

use crate::domain::{
    GenesisVerifier, NetworkParams, MAIN_NET_GENESIS, REGTEST_GENESIS, SIM_NET_GENESIS,
    TEST_NET_GENESIS,
};
use crate::error::VerificationReport;

pub static MAIN_NET_PARAMS: LazyLock<NetworkParams> =
    LazyLock::new(|| build(NetworkParams::from_constants(&MAIN_NET_GENESIS)));

pub static REGTEST_PARAMS: LazyLock<NetworkParams> =
    LazyLock::new(|| build(NetworkParams::from_constants(&REGTEST_GENESIS)));

pub static TEST_NET_PARAMS: LazyLock<NetworkParams> =
    LazyLock::new(|| build(NetworkParams::from_constants(&TEST_NET_GENESIS)));

pub static SIM_NET_PARAMS: LazyLock<NetworkParams> =
    LazyLock::new(|| build(NetworkParams::from_constants(&SIM_NET_GENESIS)));

fn build(params: NetworkParams) -> NetworkParams {
    debug!(
        network = %params.network,
        bits = params.genesis_block.header.bits,
        "Network parameters initialized"
    );
    params
}

/// Parameters for a network.
pub fn params(network: NetworkId) -> &'static NetworkParams {
    match network {
        NetworkId::Main => &MAIN_NET_PARAMS,
        NetworkId::Regtest => &REGTEST_PARAMS,
        NetworkId::Testnet => &TEST_NET_PARAMS,
        NetworkId::Simnet => &SIM_NET_PARAMS,
    }
}

/// Parameters for every network, in `NetworkId::ALL` order.
pub fn all() -> [&'static NetworkParams; 4] {
    NetworkId::ALL.map(params)
}

/// Verify every network, returning the report of each one that fails.
pub fn verify_all() -> Result<(), Vec<VerificationReport>> {
    let verifier = GenesisVerifier::new();
    let reports: Vec<_> = all()
        .into_iter()
        .filter_map(|params| verifier.verify(params).err())
        .collect();
    if reports.is_empty() {
        Ok(())
    } else {
        Err(reports)
    }
}
