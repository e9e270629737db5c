//! # Genesis Fixtures
//!
//! Literal wire bytes of the four genesis blocks, field by field. These are
//! the reference every encoding, hash and size check is measured against.

use hex_literal::hex;
use shared_types::NetworkId;

/// Length of every genesis block on the wire.
pub const GENESIS_LEN: usize = 326;

/// Length of the header prefix of a genesis block.
pub const HEADER_LEN: usize = 209;

/// Wire bytes of the main network genesis block.
pub const MAIN_NET_GENESIS_BYTES: [u8; GENESIS_LEN] = hex!(
    "04000000" // version
    "0000000000000000000000000000000000000000000000000000000000000000" // prev_block
    "b1725ea8f4c20ed74fdd511c4a65a00697388b91b0e558e02ed047f13c47ee67" // merkle_root
    "7c30dc5800000000" // timestamp
    "ffff001d" // bits
    "00000000" // height
    "46010000" // size
    "151182ab00000000" // nonce
    "0000000000000000000000000000000000000000000000000000000000000000"
    "00" // validate_pub_key
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000"
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000" // validate_sig
    "01" // tx count
    "01000000" // tx version
    "01" // input count
    "0000000000000000000000000000000000000000000000000000000000000000" // outpoint hash
    "ffffffff" // outpoint index
    "20" // script length
    "8e5bd1f4c90b80d8f3122bf4629a8821c36a706d4cb18ba9a7a5e9a587ee48fe" // coinbase script
    "ffffffff" // sequence
    "03" // output count
    "0000000000000000" // value
    "02" // script length
    "00bb" // root thread
    "0000000000000000" // value
    "02" // script length
    "51bb" // provision thread
    "0000000000000000" // value
    "02" // script length
    "52bb" // issue thread
    "00000000" // lock time
);

/// Wire bytes of the regression test network (provisional fixture) genesis block.
pub const REGTEST_GENESIS_BYTES: [u8; GENESIS_LEN] = hex!(
    "04000000" // version
    "0000000000000000000000000000000000000000000000000000000000000000" // prev_block
    "d7b2c8b0fa10c8ba601b0c80cc1b3a2af6205f5f6fc1ecafecae26de013ea8ba" // merkle_root
    "7c30dc5800000000" // timestamp
    "0f0f0f20" // bits
    "00000000" // height
    "46010000" // size
    "0900000000000000" // nonce
    "0000000000000000000000000000000000000000000000000000000000000000"
    "00" // validate_pub_key
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000"
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000" // validate_sig
    "01" // tx count
    "01000000" // tx version
    "01" // input count
    "0000000000000000000000000000000000000000000000000000000000000000" // outpoint hash
    "ffffffff" // outpoint index
    "20" // script length
    "0000000000000000003580857be175c7d577b85db2e006d5b8914e64abb7871c" // coinbase script
    "ffffffff" // sequence
    "03" // output count
    "0000000000000000" // value
    "02" // script length
    "00bb" // root thread
    "0000000000000000" // value
    "02" // script length
    "51bb" // provision thread
    "0000000000000000" // value
    "02" // script length
    "52bb" // issue thread
    "00000000" // lock time
);

/// Wire bytes of the public test network genesis block.
pub const TEST_NET_GENESIS_BYTES: [u8; GENESIS_LEN] = hex!(
    "04000000" // version
    "0000000000000000000000000000000000000000000000000000000000000000" // prev_block
    "d7b2c8b0fa10c8ba601b0c80cc1b3a2af6205f5f6fc1ecafecae26de013ea8ba" // merkle_root
    "7c30dc5800000000" // timestamp
    "ffff0720" // bits
    "00000000" // height
    "46010000" // size
    "0100000000000000" // nonce
    "0000000000000000000000000000000000000000000000000000000000000000"
    "00" // validate_pub_key
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000"
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000" // validate_sig
    "01" // tx count
    "01000000" // tx version
    "01" // input count
    "0000000000000000000000000000000000000000000000000000000000000000" // outpoint hash
    "ffffffff" // outpoint index
    "20" // script length
    "0000000000000000003580857be175c7d577b85db2e006d5b8914e64abb7871c" // coinbase script
    "ffffffff" // sequence
    "03" // output count
    "0000000000000000" // value
    "02" // script length
    "00bb" // root thread
    "0000000000000000" // value
    "02" // script length
    "51bb" // provision thread
    "0000000000000000" // value
    "02" // script length
    "52bb" // issue thread
    "00000000" // lock time
);

/// Wire bytes of the simulation network genesis block.
pub const SIM_NET_GENESIS_BYTES: [u8; GENESIS_LEN] = hex!(
    "04000000" // version
    "0000000000000000000000000000000000000000000000000000000000000000" // prev_block
    "d7b2c8b0fa10c8ba601b0c80cc1b3a2af6205f5f6fc1ecafecae26de013ea8ba" // merkle_root
    "7c30dc5800000000" // timestamp
    "ffff7f20" // bits
    "00000000" // height
    "46010000" // size
    "0200000000000000" // nonce
    "0000000000000000000000000000000000000000000000000000000000000000"
    "00" // validate_pub_key
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000"
    "00000000000000000000000000000000000000000000000000000000000000000000000000000000" // validate_sig
    "01" // tx count
    "01000000" // tx version
    "01" // input count
    "0000000000000000000000000000000000000000000000000000000000000000" // outpoint hash
    "ffffffff" // outpoint index
    "20" // script length
    "0000000000000000003580857be175c7d577b85db2e006d5b8914e64abb7871c" // coinbase script
    "ffffffff" // sequence
    "03" // output count
    "0000000000000000" // value
    "02" // script length
    "00bb" // root thread
    "0000000000000000" // value
    "02" // script length
    "51bb" // provision thread
    "0000000000000000" // value
    "02" // script length
    "52bb" // issue thread
    "00000000" // lock time
);

/// Literal bytes for a network.
pub fn genesis_bytes(network: NetworkId) -> &'static [u8; GENESIS_LEN] {
    match network {
        NetworkId::Main => &MAIN_NET_GENESIS_BYTES,
        NetworkId::Regtest => &REGTEST_GENESIS_BYTES,
        NetworkId::Testnet => &TEST_NET_GENESIS_BYTES,
        NetworkId::Simnet => &SIM_NET_GENESIS_BYTES,
    }
}

/// Expected genesis identifiers in their displayed (byte-reversed) form.
pub fn displayed_genesis_hash(network: NetworkId) -> &'static str {
    match network {
        NetworkId::Main => "681030c268e9db144ce99db5b969755bee933f47a1883012770efc6a3e2de94d",
        NetworkId::Regtest => "aaff229c195b9f6b20e50a89b8071c79e22e69f2eb660a56748ebd445ce09377",
        NetworkId::Testnet => "b7fbd98406142ee567a6c40fca012ac6591bea2ec1b828d7ad16b307afa7ca2b",
        NetworkId::Simnet => "0cca182c5d93d9b0001eff4a0605a6041279d065cae4e1190069a6d731786a7f",
    }
}
