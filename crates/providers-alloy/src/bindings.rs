//! ABI bindings for the TaikoL1 constants accessor.

use alloy_sol_types::{sol, SolCall};
use taiko_protocol::{RawConstants, RawValue, PROTOCOL_CONSTANTS_SCHEMA};

sol! {
    /// The constants accessor of the TaikoL1 contract.
    #[allow(missing_docs)]
    interface ITaikoL1 {
        /// Returns the protocol constants, in schema order.
        function getConstants() external pure returns (
            uint256 zkProofsPerBlock,
            uint256 chainId,
            uint256 maxNumBlocks,
            uint256 maxVerificationsPerTx,
            uint256 commitDelayConfirms,
            uint256 maxProofsPerForkChoice,
            uint256 blockMaxGasLimit,
            uint256 blockMaxTxs,
            bytes32 blockDeadendHash,
            uint256 txListMaxBytes,
            uint256 txMinGasLimit,
            uint256 anchorTxGasLimit,
            bytes4 anchorTxSelector,
            bytes32 invalidateBlockLogTopic
        );
    }
}

impl From<ITaikoL1::getConstantsReturn> for RawConstants {
    fn from(ret: ITaikoL1::getConstantsReturn) -> Self {
        let values: [RawValue; 14] = [
            ret.zkProofsPerBlock.into(),
            ret.chainId.into(),
            ret.maxNumBlocks.into(),
            ret.maxVerificationsPerTx.into(),
            ret.commitDelayConfirms.into(),
            ret.maxProofsPerForkChoice.into(),
            ret.blockMaxGasLimit.into(),
            ret.blockMaxTxs.into(),
            ret.blockDeadendHash.into(),
            ret.txListMaxBytes.into(),
            ret.txMinGasLimit.into(),
            ret.anchorTxGasLimit.into(),
            ret.anchorTxSelector.into(),
            ret.invalidateBlockLogTopic.into(),
        ];
        PROTOCOL_CONSTANTS_SCHEMA
            .iter()
            .zip(values)
            .fold(Self::default(), |raw, (spec, value)| raw.with_field(spec.name, value))
    }
}

/// Decodes the return data of `getConstants()` into a [RawConstants] record.
pub fn decode_constants(data: &[u8]) -> Result<RawConstants, alloy_sol_types::Error> {
    ITaikoL1::getConstantsCall::abi_decode_returns(data, true).map(Into::into)
}
