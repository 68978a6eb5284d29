#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod constants;
pub use constants::ProtocolConstants;

mod errors;
pub use errors::ShapeError;

mod raw;
pub use raw::{RawConstants, RawField, RawValue};

mod schema;
pub use schema::{check_layout, FieldKind, FieldSpec, PROTOCOL_CONSTANTS_SCHEMA};

mod signer;
pub use signer::{GoldenTouchSigner, GOLDEN_TOUCH_ADDRESS, GOLDEN_TOUCH_PRIVATE_KEY};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
