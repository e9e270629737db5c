//! # Genesis Verification
//!
//! Checks a `NetworkParams` bundle against the invariants every genesis
//! block must satisfy:
//!
//! 1. **Round-trip**: decoding the encoded block yields the same block.
//! 2. **Identity**: the header hashes to the expected genesis identifier.
//! 3. **Size consistency**: the header's declared `size` equals the block's
//!    measured encoded length.
//! 4. **Admin threads**: one transaction whose outputs are Root, Provision,
//!    Issue in that order, each of value zero.
//!
//! All checks run every time. The report lists every failure so a defective
//! definition can be fixed in one pass.

use pc_01_wire_codec::{WireCodecApi, WireCodecService};
use pc_02_hash_engine::{HashEngine, HashEngineApi};
use shared_types::{AdminThread, Block};
use tracing::{error, info, warn};

use super::params::NetworkParams;
use crate::error::{VerificationFailure, VerificationReport};

/// Verifier over an injected codec and hash engine.
#[derive(Debug, Clone, Default)]
pub struct GenesisVerifier<C: WireCodecApi = WireCodecService, E: HashEngineApi = HashEngine> {
    codec: C,
    engine: E,
}

impl GenesisVerifier {
    pub fn new() -> Self {
        Self::with_parts(WireCodecService::new(), HashEngine::new())
    }
}

impl<C: WireCodecApi, E: HashEngineApi> GenesisVerifier<C, E> {
    pub fn with_parts(codec: C, engine: E) -> Self {
        Self { codec, engine }
    }

    /// Run every check and report all failures.
    pub fn verify(&self, params: &NetworkParams) -> Result<(), VerificationReport> {
        let network = params.network;
        if params.is_provisional() {
            warn!(
                %network,
                "Genesis fixture is provisional; do not treat it as an external reference"
            );
        }

        let block = &params.genesis_block;
        let mut failures = Vec::new();
        failures.extend(self.check_round_trip(block));
        failures.extend(self.check_identity(params));
        failures.extend(self.check_size(block));
        failures.extend(check_admin_threads(block));

        if failures.is_empty() {
            info!(
                %network,
                genesis_hash = %params.genesis_hash,
                size = block.header.size,
                "Genesis block verified"
            );
            return Ok(());
        }

        for failure in &failures {
            error!(%network, %failure, "Genesis check failed");
        }
        Err(VerificationReport { network, failures })
    }

    fn check_round_trip(&self, block: &Block) -> Option<VerificationFailure> {
        let original = self.codec.encode_block(block);
        let decoded = match self.codec.decode_block(&original) {
            Ok(decoded) => decoded,
            Err(err) => return Some(err.into()),
        };
        if decoded == *block {
            return None;
        }
        Some(VerificationFailure::RoundTripMismatch {
            reencoded: self.codec.encode_block(&decoded),
            original,
        })
    }

    fn check_identity(&self, params: &NetworkParams) -> Option<VerificationFailure> {
        let actual = self.engine.block_hash(&params.genesis_block.header);
        (actual != params.genesis_hash).then_some(VerificationFailure::HashMismatch {
            expected: params.genesis_hash,
            actual,
        })
    }

    fn check_size(&self, block: &Block) -> Option<VerificationFailure> {
        let declared = block.header.size;
        let computed = self.codec.block_size(block);
        (u64::from(declared) != computed as u64)
            .then_some(VerificationFailure::SizeMismatch { declared, computed })
    }
}

/// Check the genesis transaction's administrative outputs.
pub fn check_admin_threads(block: &Block) -> Vec<VerificationFailure> {
    let mut failures = Vec::new();
    if block.transactions.len() != 1 {
        failures.push(VerificationFailure::GenesisTxCount {
            count: block.transactions.len(),
        });
    }
    let Some(coinbase) = block.transactions.first() else {
        return failures;
    };

    if coinbase.outputs.len() != AdminThread::ALL.len() {
        failures.push(VerificationFailure::AdminOutputCount {
            actual: coinbase.outputs.len(),
        });
    }

    let pairs = AdminThread::ALL.into_iter().zip(&coinbase.outputs);
    for (index, (expected, output)) in pairs.enumerate() {
        if output.as_admin_thread() != Some(expected) {
            failures.push(VerificationFailure::AdminThreadOrder {
                index,
                expected,
                found_script: hex::encode(&output.pk_script),
            });
        }
        if output.value != 0 {
            failures.push(VerificationFailure::AdminThreadValue {
                thread: expected,
                value: output.value,
            });
        }
    }
    failures
}

/// Verify with the default codec and hash engine.
pub fn verify(params: &NetworkParams) -> Result<(), VerificationReport> {
    GenesisVerifier::new().verify(params)
}
