//! # Genesis Gate
//!
//! A node may only start once the genesis definition it will build on has
//! passed every check. A broken definition is a fatal configuration error.

use anyhow::{Context, Result};
use pc_03_chain_params::{
    params, verify, verify_all, ChainParamsConfig, FixtureStatus, VerificationReport,
};
use pc_telemetry::log_block_event;
use shared_types::{Hash, NetworkId};
use thiserror::Error;
use tracing::info;

const SUBSYSTEM: &str = "node-runtime";

/// Identity of the chain a node has been cleared to join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainIdentity {
    pub network: NetworkId,
    pub genesis_hash: Hash,
    pub fixture_status: FixtureStatus,
    /// Networks whose genesis was verified before startup.
    pub verified: Vec<NetworkId>,
}

/// One or more networks failed genesis verification.
#[derive(Debug, Error)]
#[error("{} network(s) failed genesis verification: {}", .0.len(), network_names(.0))]
pub struct InvalidGenesis(pub Vec<VerificationReport>);

fn network_names(reports: &[VerificationReport]) -> String {
    reports
        .iter()
        .map(|r| r.network.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Verify the configured genesis definitions and return the selected
/// network's identity.
pub fn bootstrap(config: &ChainParamsConfig) -> Result<ChainIdentity> {
    let selected = params(config.network);

    let verified = if config.verify_all {
        info!("Verifying genesis definitions of every network");
        verify_all()
            .map_err(InvalidGenesis)
            .context("Refusing to start")?;
        NetworkId::ALL.to_vec()
    } else {
        verify(selected).with_context(|| {
            format!("Refusing to start: {} genesis definition is invalid", selected.name())
        })?;
        vec![config.network]
    };

    log_block_event!(
        info,
        SUBSYSTEM,
        "Chain identity established",
        selected.genesis_block.header.height,
        selected.genesis_hash,
        network = %selected.network,
        fixture = %selected.fixture_status
    );

    Ok(ChainIdentity {
        network: selected.network,
        genesis_hash: selected.genesis_hash,
        fixture_status: selected.fixture_status,
        verified,
    })
}
