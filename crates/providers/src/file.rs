//! A [ConstantsFetcher] backed by a JSON document on disk.

use crate::{ConstantsFetcher, ConstantsProviderError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use taiko_protocol::{ProtocolConstants, RawConstants, ShapeError};
use tracing::debug;

/// An error returned by the [FileConstantsFetcher].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileFetcherError {
    /// The file could not be read or written.
    #[error("constants file {0}: {1}")]
    Io(PathBuf, String),
    /// The file is not a valid constants record.
    #[error("constants file {0} is not a valid record: {1}")]
    Json(PathBuf, String),
}

impl From<FileFetcherError> for ConstantsProviderError {
    fn from(e: FileFetcherError) -> Self {
        match e {
            FileFetcherError::Io(..) => Self::FetchFailed(e.to_string()),
            FileFetcherError::Json(..) => {
                Self::ShapeMismatch(ShapeError::Undecodable(e.to_string()))
            }
        }
    }
}

/// Reads a [RawConstants] record from a JSON file.
///
/// The file is read again on every fetch, so replacing it on disk is picked up by the next
/// refresh. [FileConstantsFetcher::store] writes a validated snapshot in the same format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConstantsFetcher {
    path: PathBuf,
}

impl FileConstantsFetcher {
    /// Creates a new [FileConstantsFetcher] reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `constants` to the backing file as a raw record.
    pub async fn store(&self, constants: &ProtocolConstants) -> Result<(), FileFetcherError> {
        let json = serde_json::to_vec_pretty(&RawConstants::from(constants))
            .map_err(|e| FileFetcherError::Json(self.path.clone(), e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| FileFetcherError::Io(self.path.clone(), e.to_string()))?;
        debug!(target: "file_fetcher", path = %self.path.display(), "Stored protocol constants");
        Ok(())
    }
}

#[async_trait]
impl ConstantsFetcher for FileConstantsFetcher {
    type Error = FileFetcherError;

    async fn fetch_constants(&mut self) -> Result<RawConstants, Self::Error> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FileFetcherError::Io(self.path.clone(), e.to_string()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| FileFetcherError::Json(self.path.clone(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantsProvider, ProviderConfig};
    use std::time::Duration;
    use taiko_protocol::test_utils::sample_constants;

    #[tokio::test]
    async fn test_store_then_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FileConstantsFetcher::new(dir.path().join("constants.json"));
        fetcher.store(&sample_constants()).await.unwrap();

        let provider = ConstantsProvider::new(fetcher, ProviderConfig::default());
        let constants = provider.get(Duration::from_secs(60)).await.unwrap();
        assert_eq!(*constants, sample_constants());
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut fetcher = FileConstantsFetcher::new(dir.path().join("absent.json"));
        let err: ConstantsProviderError = fetcher.fetch_constants().await.unwrap_err().into();
        assert!(matches!(err, ConstantsProviderError::FetchFailed(_)));
    }

    #[tokio::test]
    async fn test_garbage_file_is_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("constants.json");
        tokio::fs::write(&path, b"{\"chainId\": 167}").await.unwrap();

        let provider = ConstantsProvider::new(FileConstantsFetcher::new(path), Default::default());
        let err = provider.refresh().await.unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[tokio::test]
    async fn test_record_missing_field_is_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("constants.json");
        let mut raw = RawConstants::from(&sample_constants());
        raw.remove("BlockDeadendHash");
        tokio::fs::write(&path, serde_json::to_vec(&raw).unwrap()).await.unwrap();

        let provider = ConstantsProvider::new(FileConstantsFetcher::new(path), Default::default());
        let err = provider.refresh().await.unwrap_err();
        assert_eq!(
            err,
            ConstantsProviderError::ShapeMismatch(ShapeError::MissingField("BlockDeadendHash"))
        );
    }
}
