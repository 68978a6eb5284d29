//! The expected layout of the `getConstants()` return record.

use crate::{RawConstants, ShapeError};
use core::fmt;
use std::collections::HashSet;

/// The kind of value a constants field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A 256-bit unsigned integer.
    Uint,
    /// A fixed-length byte string of the given width.
    FixedBytes(usize),
    /// A 20-byte account address.
    Address,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint => write!(f, "uint256"),
            Self::FixedBytes(width) => write!(f, "bytes{width}"),
            Self::Address => write!(f, "address"),
        }
    }
}

/// A named, typed slot in the constants record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name as it appears in raw records.
    pub name: &'static str,
    /// The kind of value the field must hold.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Creates a new [FieldSpec].
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The ordered fields returned by `TaikoL1.getConstants()`.
pub const PROTOCOL_CONSTANTS_SCHEMA: [FieldSpec; 14] = [
    FieldSpec::new("ZKProofsPerBlock", FieldKind::Uint),
    FieldSpec::new("ChainID", FieldKind::Uint),
    FieldSpec::new("MaxNumBlocks", FieldKind::Uint),
    FieldSpec::new("MaxVerificationsPerTx", FieldKind::Uint),
    FieldSpec::new("CommitDelayConfirms", FieldKind::Uint),
    FieldSpec::new("MaxProofsPerForkChoice", FieldKind::Uint),
    FieldSpec::new("BlockMaxGasLimit", FieldKind::Uint),
    FieldSpec::new("BlockMaxTxs", FieldKind::Uint),
    FieldSpec::new("BlockDeadendHash", FieldKind::FixedBytes(32)),
    FieldSpec::new("TxListMaxBytes", FieldKind::Uint),
    FieldSpec::new("TxMinGasLimit", FieldKind::Uint),
    FieldSpec::new("AnchorTxGasLimit", FieldKind::Uint),
    FieldSpec::new("AnchorTxSelector", FieldKind::FixedBytes(4)),
    FieldSpec::new("InvalidateBlockLogTopic", FieldKind::FixedBytes(32)),
];

/// Checks that the field names of `raw` match `schema` exactly, in order.
///
/// Field kinds are not inspected here; they are checked as each value is extracted.
pub fn check_layout(schema: &[FieldSpec], raw: &RawConstants) -> Result<(), ShapeError> {
    let mut seen = HashSet::with_capacity(raw.fields.len());
    for field in &raw.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(ShapeError::DuplicateField(field.name.clone()));
        }
    }

    if let Some(missing) = schema.iter().find(|spec| !seen.contains(spec.name)) {
        return Err(ShapeError::MissingField(missing.name));
    }

    if let Some(unknown) =
        raw.fields.iter().find(|field| schema.iter().all(|spec| spec.name != field.name))
    {
        return Err(ShapeError::UnknownField(unknown.name.clone()));
    }

    // Names are now a permutation of the schema.
    for (index, field) in raw.fields.iter().enumerate() {
        if schema[index].name == field.name {
            continue;
        }
        if let Some(expected) = schema.iter().position(|spec| spec.name == field.name) {
            return Err(ShapeError::FieldOrder { field: schema[expected].name, index, expected });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::sample_constants, RawValue};
    use alloy_primitives::U256;

    fn valid_raw() -> RawConstants {
        RawConstants::from(&sample_constants())
    }

    #[test]
    fn test_schema_names_are_unique() {
        let names: HashSet<_> = PROTOCOL_CONSTANTS_SCHEMA.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), PROTOCOL_CONSTANTS_SCHEMA.len());
    }

    #[test]
    fn test_check_layout_accepts_canonical_record() {
        assert_eq!(check_layout(&PROTOCOL_CONSTANTS_SCHEMA, &valid_raw()), Ok(()));
    }

    #[test]
    fn test_check_layout_missing_field() {
        let mut raw = valid_raw();
        raw.remove("BlockDeadendHash");
        assert_eq!(
            check_layout(&PROTOCOL_CONSTANTS_SCHEMA, &raw),
            Err(ShapeError::MissingField("BlockDeadendHash"))
        );
    }

    #[test]
    fn test_check_layout_unknown_field() {
        let raw = valid_raw().with_field("ProverBond", RawValue::Uint(U256::from(1)));
        assert_eq!(
            check_layout(&PROTOCOL_CONSTANTS_SCHEMA, &raw),
            Err(ShapeError::UnknownField("ProverBond".to_string()))
        );
    }

    #[test]
    fn test_check_layout_duplicate_field() {
        let raw = valid_raw().with_field("ChainID", RawValue::Uint(U256::from(167)));
        assert_eq!(
            check_layout(&PROTOCOL_CONSTANTS_SCHEMA, &raw),
            Err(ShapeError::DuplicateField("ChainID".to_string()))
        );
    }

    #[test]
    fn test_check_layout_swapped_fields() {
        let mut raw = valid_raw();
        raw.fields.swap(0, 1);
        assert_eq!(
            check_layout(&PROTOCOL_CONSTANTS_SCHEMA, &raw),
            Err(ShapeError::FieldOrder { field: "ChainID", index: 0, expected: 1 })
        );
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Uint.to_string(), "uint256");
        assert_eq!(FieldKind::FixedBytes(4).to_string(), "bytes4");
        assert_eq!(FieldKind::Address.to_string(), "address");
    }
}
