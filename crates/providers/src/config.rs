//! Configuration for the [crate::ConstantsProvider].

use std::time::Duration;

/// Tunables of a [crate::ConstantsProvider].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfig {
    /// The staleness tolerated by [crate::ConstantsProvider::latest].
    pub max_staleness: Duration,
    /// Upper bound on a single fetch. A fetch that exceeds it fails as `FetchFailed`.
    pub fetch_timeout: Duration,
}

impl ProviderConfig {
    /// The default staleness bound: one L1 slot.
    pub const DEFAULT_MAX_STALENESS: Duration = Duration::from_secs(12);

    /// The default fetch timeout.
    pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

    /// Returns the config with the given staleness bound.
    pub const fn with_max_staleness(mut self, max_staleness: Duration) -> Self {
        self.max_staleness = max_staleness;
        self
    }

    /// Returns the config with the given fetch timeout.
    pub const fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            max_staleness: Self::DEFAULT_MAX_STALENESS,
            fetch_timeout: Self::DEFAULT_FETCH_TIMEOUT,
        }
    }
}
