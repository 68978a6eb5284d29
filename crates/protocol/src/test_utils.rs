//! Test utilities for protocol constants.

use crate::ProtocolConstants;
use alloy_primitives::{keccak256, FixedBytes, B256, U256};

/// Returns a [ProtocolConstants] value with realistic alpha testnet parameters.
pub fn sample_constants() -> ProtocolConstants {
    let anchor = keccak256("anchor(uint256,bytes32)");
    ProtocolConstants {
        zk_proofs_per_block: U256::from(1),
        chain_id: U256::from(167),
        max_num_blocks: U256::from(2049),
        max_verifications_per_tx: U256::from(20),
        commit_delay_confirms: U256::ZERO,
        max_proofs_per_fork_choice: U256::from(5),
        block_max_gas_limit: U256::from(6_000_000),
        block_max_txs: U256::from(20),
        block_deadend_hash: B256::with_last_byte(1),
        tx_list_max_bytes: U256::from(10_240),
        tx_min_gas_limit: U256::from(21_000),
        anchor_tx_gas_limit: U256::from(250_000),
        anchor_tx_selector: FixedBytes::<4>::from_slice(&anchor[..4]),
        invalidate_block_log_topic: keccak256("BlockInvalidated(bytes32)"),
    }
}
