#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod bindings;
pub use bindings::{decode_constants, ITaikoL1};

mod fetcher;
pub use fetcher::{AlloyConstantsFetcher, AlloyConstantsFetcherError};
