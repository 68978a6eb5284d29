//! A scripted [ConstantsFetcher] for testing.

use crate::{ConstantsFetcher, ConstantsProviderError};
use async_trait::async_trait;
use spin::Mutex;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use taiko_protocol::{RawConstants, ShapeError};

/// An error returned by the [TestConstantsFetcher].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestFetcherError {
    /// No response has been scripted.
    #[error("response not set")]
    NotSet,
    /// The simulated source is down.
    #[error("source unavailable")]
    Unavailable,
    /// The simulated source answered with bytes that do not decode.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<TestFetcherError> for ConstantsProviderError {
    fn from(e: TestFetcherError) -> Self {
        match e {
            TestFetcherError::Malformed(msg) => Self::ShapeMismatch(ShapeError::Undecodable(msg)),
            e => Self::FetchFailed(e.to_string()),
        }
    }
}

/// A mock [ConstantsFetcher] that returns a scripted response.
///
/// Clones share their state, so a test can keep one handle and hand another to the provider.
#[derive(Debug, Clone, Default)]
pub struct TestConstantsFetcher {
    /// The response returned by every fetch.
    response: Arc<Mutex<Option<Result<RawConstants, TestFetcherError>>>>,
    /// How long each fetch takes.
    delay: Arc<Mutex<Option<Duration>>>,
    /// Number of fetches issued.
    calls: Arc<AtomicUsize>,
}

impl TestConstantsFetcher {
    /// Creates a fetcher that returns `raw`.
    pub fn new(raw: RawConstants) -> Self {
        let fetcher = Self::default();
        fetcher.set_response(raw);
        fetcher
    }

    /// Makes every following fetch return `raw`.
    pub fn set_response(&self, raw: RawConstants) {
        *self.response.lock() = Some(Ok(raw));
    }

    /// Makes every following fetch fail with `err`.
    pub fn set_error(&self, err: TestFetcherError) {
        *self.response.lock() = Some(Err(err));
    }

    /// Makes every following fetch take `delay`.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    /// Returns the number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConstantsFetcher for TestConstantsFetcher {
    type Error = TestFetcherError;

    async fn fetch_constants(&mut self) -> Result<RawConstants, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.response.lock().clone().unwrap_or(Err(TestFetcherError::NotSet))
    }
}
