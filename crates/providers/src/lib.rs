#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod macros;

#[cfg(feature = "metrics")]
pub mod metrics;
#[cfg(feature = "metrics")]
pub use metrics::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

mod config;
pub use config::ProviderConfig;

mod errors;
pub use errors::ConstantsProviderError;

mod traits;
pub use traits::ConstantsFetcher;

mod file;
pub use file::{FileConstantsFetcher, FileFetcherError};

mod provider;
pub use provider::{CachedSnapshot, ConstantsProvider};
