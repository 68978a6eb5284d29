//! Test utilities for the constants provider.

mod fetcher;
pub use fetcher::{TestConstantsFetcher, TestFetcherError};

mod tracing;
pub use tracing::{CollectingLayer, TraceStorage};
