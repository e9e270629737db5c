//! # Genesis Vector Tests
//!
//! Every network's registry block must encode to its literal fixture, hash
//! to its expected identifier and declare its own encoded size.

#[cfg(test)]
mod tests {
    use pc_01_wire_codec::{decode, encode, encoded_size, BLOCK_HEADER_SIZE};
    use pc_02_hash_engine::adapters::sha256d::sha256d;
    use pc_02_hash_engine::{HashEngine, HashEngineApi};
    use pc_03_chain_params::{params, FixtureStatus, GENESIS_TIMESTAMP};
    use shared_types::{
        AdminThread, Block, BlockHeader, Hash, NetworkId, OutPoint, Transaction, TxIn, TxOut,
    };

    use crate::fixtures::{displayed_genesis_hash, genesis_bytes, GENESIS_LEN, HEADER_LEN};

    // =============================================================================
    // BYTE REPRODUCTION
    // =============================================================================

    #[test]
    fn test_encoding_reproduces_literal_bytes() {
        for network in NetworkId::ALL {
            let encoded = encode(&params(network).genesis_block);
            assert_eq!(
                encoded.as_slice(),
                genesis_bytes(network).as_slice(),
                "{network}: encoding differs from fixture"
            );
        }
    }

    #[test]
    fn test_literal_bytes_decode_to_registry_block() {
        for network in NetworkId::ALL {
            let decoded: Block = decode(genesis_bytes(network)).unwrap();
            assert_eq!(decoded, params(network).genesis_block, "{network}");
        }
    }

    #[test]
    fn test_header_prefix_is_fixed_width() {
        assert_eq!(BLOCK_HEADER_SIZE, HEADER_LEN);
        for network in NetworkId::ALL {
            let header = &params(network).genesis_block.header;
            assert_eq!(encode(header).as_slice(), &genesis_bytes(network)[..HEADER_LEN]);
        }
    }

    // =============================================================================
    // HASH IDENTITY
    // =============================================================================

    #[test]
    fn test_header_hash_matches_registry() {
        let engine = HashEngine::new();
        for network in NetworkId::ALL {
            let params = params(network);
            let computed = engine.block_hash(&params.genesis_block.header);
            assert_eq!(computed, params.genesis_hash, "{network}");
            assert_eq!(sha256d(&genesis_bytes(network)[..HEADER_LEN]), computed);
            assert_eq!(computed.to_string(), displayed_genesis_hash(network));
        }
    }

    #[test]
    fn test_displayed_hash_parses_back() {
        for network in NetworkId::ALL {
            let parsed: Hash = displayed_genesis_hash(network).parse().unwrap();
            assert_eq!(parsed, params(network).genesis_hash);
        }
    }

    #[test]
    fn test_merkle_single_transaction_identity() {
        let engine = HashEngine::new();
        for network in NetworkId::ALL {
            let txs = &params(network).genesis_block.transactions;
            let tx_hash = engine.tx_hash(&txs[0]);
            assert_eq!(engine.merkle_root(txs), tx_hash);
            assert_eq!(sha256d(&genesis_bytes(network)[HEADER_LEN + 1..]), tx_hash);
        }
    }

    // =============================================================================
    // SIZE CONSISTENCY
    // =============================================================================

    #[test]
    fn test_declared_size_matches_literal_length() {
        for network in NetworkId::ALL {
            let block = &params(network).genesis_block;
            assert_eq!(block.header.size as usize, GENESIS_LEN);
            assert_eq!(encoded_size(block), GENESIS_LEN);
        }
    }

    // =============================================================================
    // ADMIN THREADS
    // =============================================================================

    #[test]
    fn test_admin_threads_in_literal_order() {
        for network in NetworkId::ALL {
            let block: Block = decode(genesis_bytes(network)).unwrap();
            assert_eq!(block.transactions.len(), 1);
            let outputs = &block.transactions[0].outputs;
            let threads: Vec<_> = outputs.iter().map(TxOut::as_admin_thread).collect();
            assert_eq!(threads, AdminThread::ALL.map(Some).to_vec(), "{network}");
            assert!(outputs.iter().all(|out| out.value == 0));
        }
    }

    #[test]
    fn test_only_regtest_fixture_is_provisional() {
        for network in NetworkId::ALL {
            let provisional = params(network).fixture_status == FixtureStatus::Provisional;
            assert_eq!(provisional, network == NetworkId::Regtest);
        }
    }

    // =============================================================================
    // END-TO-END: MAIN NETWORK FROM PARTS
    // =============================================================================

    #[test]
    fn test_main_net_block_from_parts() {
        let coinbase = Transaction {
            version: 1,
            inputs: vec![TxIn {
                previous_outpoint: OutPoint {
                    hash: Hash::ZERO,
                    index: 0xFFFF_FFFF,
                },
                signature_script: hex::decode(
                    "8e5bd1f4c90b80d8f3122bf4629a8821c36a706d4cb18ba9a7a5e9a587ee48fe",
                )
                .unwrap(),
                sequence: 0xFFFF_FFFF,
            }],
            outputs: vec![
                TxOut {
                    value: 0,
                    pk_script: vec![0x00, 0xbb],
                },
                TxOut {
                    value: 0,
                    pk_script: vec![0x51, 0xbb],
                },
                TxOut {
                    value: 0,
                    pk_script: vec![0x52, 0xbb],
                },
            ],
            lock_time: 0,
        };
        let merkle_root: Hash = Hash::from_bytes(
            genesis_bytes(NetworkId::Main)[36..68]
                .try_into()
                .unwrap(),
        );
        let block = Block {
            header: BlockHeader {
                version: 4,
                prev_block: Hash::ZERO,
                merkle_root,
                timestamp: GENESIS_TIMESTAMP,
                bits: 0x1d00_ffff,
                height: 0,
                size: 326,
                nonce: 0xab82_1115,
                ..Default::default()
            },
            transactions: vec![coinbase],
        };

        assert_eq!(encode(&block).as_slice(), genesis_bytes(NetworkId::Main).as_slice());
        assert_eq!(
            HashEngine::new().block_hash(&block.header).to_string(),
            displayed_genesis_hash(NetworkId::Main)
        );
    }
}
