//! # Permissioned-Chain Node Runtime
//!
//! Entry point. Refuses to start unless the configured genesis definition
//! passes every invariant check.

use anyhow::{Context, Result};
use node_runtime::bootstrap;
use pc_03_chain_params::ChainParamsConfig;
use pc_telemetry::{init_telemetry, TelemetryConfig};
use tracing::info;

fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    let _guard = init_telemetry(&telemetry).context("Failed to initialize telemetry")?;

    let config = ChainParamsConfig::from_env().context("Invalid chain parameter configuration")?;
    info!(
        network = %config.network,
        verify_all = config.verify_all,
        "Starting Permissioned-Chain node"
    );

    let identity = bootstrap(&config)?;
    info!(
        network = %identity.network,
        genesis_hash = %identity.genesis_hash,
        verified = identity.verified.len(),
        "Genesis gate passed"
    );
    Ok(())
}
