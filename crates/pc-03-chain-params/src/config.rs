//! Registry configuration from environment variables.

use std::env;

use shared_types::NetworkId;

use crate::error::ConfigError;

/// Network selection variable.
pub const NETWORK_VAR: &str = "PC_NETWORK";
/// Verify-every-network flag.
pub const VERIFY_ALL_VAR: &str = "PC_VERIFY_ALL";

/// Which genesis definitions a node checks at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParamsConfig {
    /// Network the node runs on.
    pub network: NetworkId,
    /// Also verify every other network's genesis.
    pub verify_all: bool,
}

impl Default for ChainParamsConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::Main,
            verify_all: false,
        }
    }
}

impl ChainParamsConfig {
    /// Load from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `PC_NETWORK`: mainnet, regtest, testnet or simnet (default: mainnet)
    /// - `PC_VERIFY_ALL`: verify all four networks (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from any key/value source. Unset and blank values take the
    /// defaults; anything else must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let network = match value(NETWORK_VAR) {
            Some(raw) => raw.parse::<NetworkId>().map_err(|source| ConfigError::UnknownNetwork {
                key: NETWORK_VAR,
                source,
            })?,
            None => defaults.network,
        };

        let verify_all = match value(VERIFY_ALL_VAR) {
            Some(raw) => parse_flag(VERIFY_ALL_VAR, &raw)?,
            None => defaults.verify_all,
        };

        Ok(Self {
            network,
            verify_all,
        })
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}
