//! A [ConstantsFetcher] that uses an alloy provider on the backend.

use crate::{decode_constants, ITaikoL1};
use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, ReqwestProvider};
use alloy_sol_types::SolCall;
use alloy_transport::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use taiko_protocol::{RawConstants, ShapeError};
use taiko_providers::{ConstantsFetcher, ConstantsProviderError};
use tracing::trace;

/// The [AlloyConstantsFetcher] reads the protocol constants of a TaikoL1 deployment over
/// Ethereum JSON-RPC, using an alloy provider as the backend.
///
/// **Note**:
/// Every fetch is a single `eth_call` of `getConstants()` against the `latest` block.
#[derive(Debug, Clone)]
pub struct AlloyConstantsFetcher {
    /// The inner Ethereum JSON-RPC provider.
    inner: ReqwestProvider,
    /// The TaikoL1 contract address.
    taiko_l1: Address,
}

impl AlloyConstantsFetcher {
    /// Creates a new [AlloyConstantsFetcher] with the given alloy provider.
    pub const fn new(inner: ReqwestProvider, taiko_l1: Address) -> Self {
        Self { inner, taiko_l1 }
    }

    /// Creates a new [AlloyConstantsFetcher] from the provided [reqwest::Url].
    pub fn new_http(url: reqwest::Url, taiko_l1: Address) -> Self {
        let inner = ReqwestProvider::new_http(url);
        Self::new(inner, taiko_l1)
    }

    /// Returns the TaikoL1 contract address.
    pub const fn taiko_l1(&self) -> Address {
        self.taiko_l1
    }
}

/// An error for the [AlloyConstantsFetcher].
#[derive(Debug, thiserror::Error)]
pub enum AlloyConstantsFetcherError {
    /// The `eth_call` failed.
    #[error("eth_call of getConstants() on {0} failed: {1}")]
    Call(Address, RpcError<TransportErrorKind>),
    /// The return data does not decode as the expected tuple.
    #[error("getConstants() on {0} returned undecodable data: {1}")]
    Decode(Address, alloy_sol_types::Error),
}

impl From<AlloyConstantsFetcherError> for ConstantsProviderError {
    fn from(e: AlloyConstantsFetcherError) -> Self {
        match e {
            AlloyConstantsFetcherError::Call(..) => Self::FetchFailed(e.to_string()),
            AlloyConstantsFetcherError::Decode(..) => {
                Self::ShapeMismatch(ShapeError::Undecodable(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl ConstantsFetcher for AlloyConstantsFetcher {
    type Error = AlloyConstantsFetcherError;

    async fn fetch_constants(&mut self) -> Result<RawConstants, Self::Error> {
        let call = serde_json::json!({
            "to": self.taiko_l1,
            "data": Bytes::from(ITaikoL1::getConstantsCall {}.abi_encode()),
        });
        let data: Bytes = self
            .inner
            .raw_request("eth_call".into(), (call, "latest"))
            .await
            .map_err(|e| AlloyConstantsFetcherError::Call(self.taiko_l1, e))?;
        trace!(target: "alloy_fetcher", len = data.len(), "Received getConstants() return data");

        decode_constants(&data).map_err(|e| AlloyConstantsFetcherError::Decode(self.taiko_l1, e))
    }
}
