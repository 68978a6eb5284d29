//! This module defines the [ConstantsFetcher] trait.

use crate::ConstantsProviderError;
use async_trait::async_trait;
use core::fmt::Display;
use taiko_protocol::RawConstants;

/// Describes a source that can read the current protocol constants record.
///
/// Implementations return the record as-is. Validation against the expected schema is left to
/// the [crate::ConstantsProvider], so a fetcher only fails on its own transport or decoding
/// problems.
#[async_trait]
pub trait ConstantsFetcher {
    /// The error type for the [ConstantsFetcher].
    ///
    /// The conversion into [ConstantsProviderError] decides whether a failure is a transport
    /// failure or a shape mismatch.
    type Error: Display + Into<ConstantsProviderError>;

    /// Reads the current constants record from the source.
    async fn fetch_constants(&mut self) -> Result<RawConstants, Self::Error>;
}
