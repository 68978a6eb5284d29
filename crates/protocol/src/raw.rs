//! Untrusted constants records as handed back by a fetcher.

use crate::FieldKind;
use alloy_primitives::{Address, Bytes, FixedBytes, U256};

/// A single value in a [RawConstants] record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RawValue {
    /// An unsigned integer.
    Uint(U256),
    /// A byte string whose length is its width.
    FixedBytes(Bytes),
    /// An account address.
    Address(Address),
}

impl RawValue {
    /// Returns the [FieldKind] of the value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Uint(_) => FieldKind::Uint,
            Self::FixedBytes(bytes) => FieldKind::FixedBytes(bytes.len()),
            Self::Address(_) => FieldKind::Address,
        }
    }
}

impl From<U256> for RawValue {
    fn from(value: U256) -> Self {
        Self::Uint(value)
    }
}

impl<const N: usize> From<FixedBytes<N>> for RawValue {
    fn from(value: FixedBytes<N>) -> Self {
        Self::FixedBytes(Bytes::copy_from_slice(value.as_slice()))
    }
}

impl From<Address> for RawValue {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

/// A named [RawValue].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawField {
    /// The field name.
    pub name: String,
    /// The field value.
    pub value: RawValue,
}

/// An ordered, unvalidated constants record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawConstants {
    /// The fields, in the order the source produced them.
    pub fields: Vec<RawField>,
}

impl RawConstants {
    /// Appends a field, returning the record.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.push(RawField { name: name.into(), value: value.into() });
    }

    /// Returns the value of the first field called `name`.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.iter().find(|field| field.name == name).map(|field| &field.value)
    }

    /// Replaces the value of the first field called `name`, returning the previous value.
    pub fn set(&mut self, name: &str, value: impl Into<RawValue>) -> Option<RawValue> {
        self.fields
            .iter_mut()
            .find(|field| field.name == name)
            .map(|field| core::mem::replace(&mut field.value, value.into()))
    }

    /// Removes every field called `name`, returning the first removed value.
    pub fn remove(&mut self, name: &str) -> Option<RawValue> {
        let index = self.fields.iter().position(|field| field.name == name)?;
        let removed = self.fields.remove(index);
        self.fields.retain(|field| field.name != name);
        Some(removed.value)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_raw_value_kind() {
        assert_eq!(RawValue::from(U256::from(1)).kind(), FieldKind::Uint);
        assert_eq!(RawValue::from(FixedBytes::<4>::ZERO).kind(), FieldKind::FixedBytes(4));
        assert_eq!(RawValue::from(Address::ZERO).kind(), FieldKind::Address);
    }

    #[test]
    fn test_raw_constants_edit() {
        let hash = b256!("0000000000000000000000000000000000000000000000000000000000000001");
        let mut raw = RawConstants::default()
            .with_field("ChainID", U256::from(167))
            .with_field("BlockDeadendHash", hash);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.get("ChainID"), Some(&RawValue::Uint(U256::from(167))));

        let previous = raw.set("ChainID", U256::from(1));
        assert_eq!(previous, Some(RawValue::Uint(U256::from(167))));
        assert!(raw.set("Missing", U256::ZERO).is_none());

        assert!(raw.remove("BlockDeadendHash").is_some());
        assert!(raw.get("BlockDeadendHash").is_none());
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn test_remove_drops_duplicates() {
        let mut raw = RawConstants::default()
            .with_field("ChainID", U256::from(1))
            .with_field("ChainID", address!("0000777735367b36bC9B61C50022d9D0700dB4Ec"));
        assert_eq!(raw.remove("ChainID"), Some(RawValue::Uint(U256::from(1))));
        assert!(raw.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_raw_constants_json() {
        let json = r#"{"fields":[
            {"name":"ChainID","value":{"uint":"0xa7"}},
            {"name":"AnchorTxSelector","value":{"fixedBytes":"0xa0ca2d08"}}
        ]}"#;
        let raw: RawConstants = serde_json::from_str(json).unwrap();
        assert_eq!(raw.get("ChainID"), Some(&RawValue::Uint(U256::from(167))));
        assert_eq!(raw.get("AnchorTxSelector").map(RawValue::kind), Some(FieldKind::FixedBytes(4)));
    }
}
