//! Errors raised while validating a raw constants record.

use crate::FieldKind;

/// A structural mismatch between a [crate::RawConstants] record and the expected schema.
///
/// Any of these means the remote contract and this binary disagree on the shape of the
/// constants, so nothing from the record may be trusted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The same field name appears more than once.
    #[error("duplicate field `{0}`")]
    DuplicateField(String),
    /// A field required by the schema is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// The record carries a field the schema does not know.
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// A known field sits at the wrong position.
    #[error("field `{field}` found at position {index}, expected at position {expected}")]
    FieldOrder {
        /// The misplaced field.
        field: &'static str,
        /// Where the field was found.
        index: usize,
        /// Where the schema places it.
        expected: usize,
    },
    /// A field holds a value of the wrong kind.
    #[error("field `{field}` is {got}, expected {expected}")]
    KindMismatch {
        /// The offending field.
        field: &'static str,
        /// The kind required by the schema.
        expected: FieldKind,
        /// The kind found in the record.
        got: FieldKind,
    },
    /// The record could not be decoded into fields at all.
    #[error("undecodable constants record: {0}")]
    Undecodable(String),
}
