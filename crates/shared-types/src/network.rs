//! # Network Identifiers
//!
//! The four network variants a node can join. Each one has its own genesis
//! block and therefore its own chain identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::NetworkParseError;

/// Supported network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network.
    Main,
    /// Regression test network.
    Regtest,
    /// Public test network.
    Testnet,
    /// Simulation test network.
    Simnet,
}

impl NetworkId {
    /// Every network, in registry order.
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Regtest,
        NetworkId::Testnet,
        NetworkId::Simnet,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            NetworkId::Main => "mainnet",
            NetworkId::Regtest => "regtest",
            NetworkId::Testnet => "testnet",
            NetworkId::Simnet => "simnet",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "regtest" | "regression" => Ok(NetworkId::Regtest),
            "test" | "testnet" | "testnet3" => Ok(NetworkId::Testnet),
            "sim" | "simnet" => Ok(NetworkId::Simnet),
            other => Err(NetworkParseError(other.to_string())),
        }
    }
}
