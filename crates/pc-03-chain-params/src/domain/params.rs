//! # Network Parameters
//!
//! The immutable bundle every component consults for chain identity.

use std::fmt;

use shared_types::{Block, Hash, NetworkId};

use super::genesis::{build_genesis_block, GenesisConstants};

/// How far a network's genesis fixture can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureStatus {
    /// Launched network; the bytes are chain identity.
    Final,
    /// Awaiting replacement bytes. Verified like any other fixture, but not
    /// to be relied on as an external reference.
    Provisional,
}

impl fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureStatus::Final => f.write_str("final"),
            FixtureStatus::Provisional => f.write_str("provisional"),
        }
    }
}

/// Genesis definition for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    pub network: NetworkId,
    pub genesis_block: Block,
    /// Expected identifier of `genesis_block`.
    pub genesis_hash: Hash,
    pub fixture_status: FixtureStatus,
}

impl NetworkParams {
    /// Build a network's parameters from its table row.
    pub fn from_constants(constants: &GenesisConstants) -> Self {
        Self {
            network: constants.network,
            genesis_block: build_genesis_block(constants),
            genesis_hash: Hash(constants.expected_hash),
            fixture_status: constants.fixture_status,
        }
    }

    pub fn name(&self) -> &'static str {
        self.network.name()
    }

    pub fn is_provisional(&self) -> bool {
        self.fixture_status == FixtureStatus::Provisional
    }
}
