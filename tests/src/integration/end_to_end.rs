//! # End-to-End Scenarios
//!
//! Defective genesis definitions, malformed wire input and the node's
//! startup gate, exercised across all crates at once.

#[cfg(test)]
mod tests {
    use node_runtime::bootstrap;
    use pc_01_wire_codec::{decode, decode_prefix, CodecError, CountDefect};
    use pc_02_hash_engine::{HashEngine, HashEngineApi};
    use pc_03_chain_params::{
        params, verify, verify_all, ChainParamsConfig, NetworkParams, VerificationFailure,
    };
    use proptest::prelude::*;
    use shared_types::{AdminThread, Block, BlockHeader, NetworkId};

    use crate::fixtures::{genesis_bytes, GENESIS_LEN, HEADER_LEN};

    fn cloned(network: NetworkId) -> NetworkParams {
        params(network).clone()
    }

    // =============================================================================
    // DEFECTIVE DEFINITIONS
    // =============================================================================

    #[test]
    fn test_registry_verifies_every_network() {
        assert_eq!(verify_all(), Ok(()));
    }

    #[test]
    fn test_defective_definition_reports_every_failure() {
        let mut params = cloned(NetworkId::Simnet);
        params.genesis_block.header.size = 300;
        let outputs = &mut params.genesis_block.transactions[0].outputs;
        outputs.swap(1, 2);
        outputs[0].value = 7;

        let report = verify(&params).unwrap_err();
        assert_eq!(report.network, NetworkId::Simnet);

        let failures = &report.failures;
        assert!(failures.contains(&VerificationFailure::SizeMismatch {
            declared: 300,
            computed: GENESIS_LEN,
        }));
        assert!(failures
            .iter()
            .any(|f| matches!(f, VerificationFailure::HashMismatch { .. })));
        assert!(failures.contains(&VerificationFailure::AdminThreadValue {
            thread: AdminThread::Root,
            value: 7,
        }));
        assert!(failures.contains(&VerificationFailure::AdminThreadOrder {
            index: 1,
            expected: AdminThread::Provision,
            found_script: "52bb".to_string(),
        }));
        assert!(failures.contains(&VerificationFailure::AdminThreadOrder {
            index: 2,
            expected: AdminThread::Issue,
            found_script: "51bb".to_string(),
        }));
        assert_eq!(failures.len(), 5);

        let text = report.to_string();
        assert!(text.contains("simnet"));
        assert!(text.contains("5 check(s) failed"));
    }

    #[test]
    fn test_size_field_is_not_self_fulfilling() {
        // Growing the coinbase script grows the block but not its declared size.
        let mut params = cloned(NetworkId::Testnet);
        params.genesis_block.transactions[0].inputs[0]
            .signature_script
            .push(0x00);
        let report = verify(&params).unwrap_err();
        assert!(report.failures.contains(&VerificationFailure::SizeMismatch {
            declared: 326,
            computed: 327,
        }));
    }

    #[test]
    fn test_flipped_merkle_root_changes_identity() {
        let mut bytes = genesis_bytes(NetworkId::Main).to_vec();
        bytes[36] ^= 0x01;
        let block: Block = decode(&bytes).unwrap();
        let hash = HashEngine::new().block_hash(&block.header);
        assert_ne!(hash, params(NetworkId::Main).genesis_hash);
    }

    // =============================================================================
    // MALFORMED WIRE INPUT
    // =============================================================================

    #[test]
    fn test_short_header_is_truncated() {
        let bytes = genesis_bytes(NetworkId::Main);
        for len in [0, 4, 100, HEADER_LEN - 1] {
            assert!(matches!(
                decode::<BlockHeader>(&bytes[..len]),
                Err(CodecError::Truncated { .. })
            ));
        }
        assert!(decode::<BlockHeader>(&bytes[..HEADER_LEN]).is_ok());
        assert_eq!(
            decode::<BlockHeader>(&bytes[..HEADER_LEN + 1]),
            Err(CodecError::TrailingBytes {
                entity: "block header",
                remaining: 1
            })
        );
    }

    #[test]
    fn test_count_marker_without_trailing_bytes() {
        let mut bytes = genesis_bytes(NetworkId::Regtest)[..HEADER_LEN].to_vec();
        bytes.extend_from_slice(&[0xfd, 0x01]);
        assert_eq!(
            decode::<Block>(&bytes),
            Err(CodecError::MalformedCount {
                field: "block.tx_count",
                defect: CountDefect::MissingBytes {
                    marker: 0xfd,
                    needed: 2,
                    remaining: 1
                }
            })
        );
    }

    #[test]
    fn test_truncated_block_is_rejected() {
        let bytes = genesis_bytes(NetworkId::Testnet);
        assert!(matches!(
            decode::<Block>(&bytes[..GENESIS_LEN - 1]),
            Err(CodecError::Truncated {
                field: "tx.lock_time",
                ..
            })
        ));
    }

    #[test]
    fn test_trailing_bytes_and_prefix_decode() {
        let mut bytes = genesis_bytes(NetworkId::Simnet).to_vec();
        bytes.push(0x00);
        assert!(matches!(
            decode::<Block>(&bytes),
            Err(CodecError::TrailingBytes { remaining: 1, .. })
        ));

        let (block, consumed) = decode_prefix::<Block>(&bytes).unwrap();
        assert_eq!(consumed, GENESIS_LEN);
        assert_eq!(block, params(NetworkId::Simnet).genesis_block);
    }

    // =============================================================================
    // STARTUP GATE
    // =============================================================================

    #[test]
    fn test_bootstrap_every_network() {
        for network in NetworkId::ALL {
            let identity = bootstrap(&ChainParamsConfig {
                network,
                verify_all: false,
            })
            .unwrap();
            assert_eq!(identity.genesis_hash, params(network).genesis_hash);
        }
    }

    proptest! {
        #[test]
        fn prop_any_header_byte_changes_identity(offset in 0usize..HEADER_LEN, mask in 1u8..=255) {
            let mut bytes = genesis_bytes(NetworkId::Main)[..HEADER_LEN].to_vec();
            bytes[offset] ^= mask;
            let header: BlockHeader = decode(&bytes).unwrap();
            prop_assert_ne!(
                HashEngine::new().block_hash(&header),
                params(NetworkId::Main).genesis_hash
            );
        }
    }
}
