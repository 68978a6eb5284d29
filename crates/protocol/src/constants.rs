//! This module contains the [ProtocolConstants] type.

use crate::{
    check_layout, FieldSpec, RawConstants, RawValue, ShapeError, PROTOCOL_CONSTANTS_SCHEMA,
};
use alloy_primitives::{FixedBytes, B256, U256};

/// The constants of the Taiko protocol, as returned by `TaikoL1.getConstants()`.
///
/// A value of this type can only be obtained from a [RawConstants] record that matched
/// [PROTOCOL_CONSTANTS_SCHEMA] exactly, or by spelling out every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProtocolConstants {
    /// Number of ZK proofs required per block.
    pub zk_proofs_per_block: U256,
    /// The L2 chain ID.
    pub chain_id: U256,
    /// Size of the block ring buffer.
    pub max_num_blocks: U256,
    /// Maximum number of blocks verified by a single transaction.
    pub max_verifications_per_tx: U256,
    /// L1 confirmations required between committing and proposing a block.
    pub commit_delay_confirms: U256,
    /// Maximum number of proofs accepted for a single fork choice.
    pub max_proofs_per_fork_choice: U256,
    /// Gas limit of an L2 block.
    pub block_max_gas_limit: U256,
    /// Maximum number of transactions in an L2 block.
    pub block_max_txs: U256,
    /// The hash marking a block as a dead end.
    pub block_deadend_hash: B256,
    /// Maximum size of a transaction list, in bytes.
    pub tx_list_max_bytes: U256,
    /// Minimum gas limit of an L2 transaction.
    pub tx_min_gas_limit: U256,
    /// Gas limit of the anchor transaction.
    pub anchor_tx_gas_limit: U256,
    /// Function selector of the anchor call.
    pub anchor_tx_selector: FixedBytes<4>,
    /// Topic of the block invalidation log.
    pub invalidate_block_log_topic: B256,
}

/// A [RawValue] paired with the schema slot it must fill.
#[derive(Debug)]
struct Slot<'a> {
    spec: &'a FieldSpec,
    value: &'a RawValue,
}

impl Slot<'_> {
    fn mismatch(&self) -> ShapeError {
        ShapeError::KindMismatch {
            field: self.spec.name,
            expected: self.spec.kind,
            got: self.value.kind(),
        }
    }

    fn uint(&self) -> Result<U256, ShapeError> {
        match self.value {
            RawValue::Uint(value) if self.value.kind() == self.spec.kind => Ok(*value),
            _ => Err(self.mismatch()),
        }
    }

    fn fixed_bytes<const N: usize>(&self) -> Result<FixedBytes<N>, ShapeError> {
        match self.value {
            RawValue::FixedBytes(bytes) if self.value.kind() == self.spec.kind => {
                FixedBytes::<N>::try_from(&bytes[..]).map_err(|_| self.mismatch())
            }
            _ => Err(self.mismatch()),
        }
    }
}

impl TryFrom<&RawConstants> for ProtocolConstants {
    type Error = ShapeError;

    fn try_from(raw: &RawConstants) -> Result<Self, Self::Error> {
        check_layout(&PROTOCOL_CONSTANTS_SCHEMA, raw)?;

        let slots = PROTOCOL_CONSTANTS_SCHEMA
            .iter()
            .zip(raw.fields.iter())
            .map(|(spec, field)| Slot { spec, value: &field.value })
            .collect::<Vec<_>>();

        Ok(Self {
            zk_proofs_per_block: slots[0].uint()?,
            chain_id: slots[1].uint()?,
            max_num_blocks: slots[2].uint()?,
            max_verifications_per_tx: slots[3].uint()?,
            commit_delay_confirms: slots[4].uint()?,
            max_proofs_per_fork_choice: slots[5].uint()?,
            block_max_gas_limit: slots[6].uint()?,
            block_max_txs: slots[7].uint()?,
            block_deadend_hash: slots[8].fixed_bytes()?,
            tx_list_max_bytes: slots[9].uint()?,
            tx_min_gas_limit: slots[10].uint()?,
            anchor_tx_gas_limit: slots[11].uint()?,
            anchor_tx_selector: slots[12].fixed_bytes()?,
            invalidate_block_log_topic: slots[13].fixed_bytes()?,
        })
    }
}

impl TryFrom<RawConstants> for ProtocolConstants {
    type Error = ShapeError;

    fn try_from(raw: RawConstants) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}

impl From<&ProtocolConstants> for RawConstants {
    fn from(constants: &ProtocolConstants) -> Self {
        let values: [RawValue; 14] = [
            constants.zk_proofs_per_block.into(),
            constants.chain_id.into(),
            constants.max_num_blocks.into(),
            constants.max_verifications_per_tx.into(),
            constants.commit_delay_confirms.into(),
            constants.max_proofs_per_fork_choice.into(),
            constants.block_max_gas_limit.into(),
            constants.block_max_txs.into(),
            constants.block_deadend_hash.into(),
            constants.tx_list_max_bytes.into(),
            constants.tx_min_gas_limit.into(),
            constants.anchor_tx_gas_limit.into(),
            constants.anchor_tx_selector.into(),
            constants.invalidate_block_log_topic.into(),
        ];
        PROTOCOL_CONSTANTS_SCHEMA
            .iter()
            .zip(values)
            .fold(Self::default(), |raw, (spec, value)| raw.with_field(spec.name, value))
    }
}
