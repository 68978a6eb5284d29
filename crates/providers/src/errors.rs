//! Error types for the constants provider.

use taiko_protocol::ShapeError;

/// An error returned by the [crate::ConstantsProvider].
///
/// Errors are [Clone] so that every caller waiting on the same refresh receives its outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstantsProviderError {
    /// The source could not be reached or did not answer in time. The cache is unchanged.
    #[error("failed to fetch protocol constants: {0}")]
    FetchFailed(String),
    /// The source answered with a record of the wrong shape. The cache is unchanged.
    #[error("protocol constants shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeError),
    /// There is no cached snapshot and the refresh attempt failed.
    #[error("no protocol constants available: {0}")]
    NoConstantsAvailable(Box<ConstantsProviderError>),
}

impl ConstantsProviderError {
    /// Returns true if the error means the source and this client disagree on the record shape.
    pub fn is_shape_mismatch(&self) -> bool {
        match self {
            Self::ShapeMismatch(_) => true,
            Self::NoConstantsAvailable(cause) => cause.is_shape_mismatch(),
            Self::FetchFailed(_) => false,
        }
    }

    /// Returns a short label for the error kind, used in logs and metrics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchFailed(_) => "fetch_failed",
            Self::ShapeMismatch(_) => "shape_mismatch",
            Self::NoConstantsAvailable(_) => "no_constants_available",
        }
    }
}
