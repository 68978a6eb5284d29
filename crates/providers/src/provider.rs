//! Contains the [ConstantsProvider], which caches validated protocol constants.

use crate::{inc, timer, ConstantsFetcher, ConstantsProviderError, ProviderConfig};
use alloy_primitives::{Address, B256};
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use taiko_protocol::{GoldenTouchSigner, ProtocolConstants};
use tokio::{
    sync::{watch, Mutex},
    time::{timeout, Instant},
};
use tracing::{debug, error, info, trace, warn};

/// A validated [ProtocolConstants] value and the moment it was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSnapshot {
    constants: Arc<ProtocolConstants>,
    captured_at: Instant,
}

impl CachedSnapshot {
    /// Captures `constants` now.
    pub fn new(constants: ProtocolConstants) -> Self {
        Self { constants: Arc::new(constants), captured_at: Instant::now() }
    }

    /// Returns the cached constants.
    pub fn constants(&self) -> Arc<ProtocolConstants> {
        Arc::clone(&self.constants)
    }

    /// Returns the capture time.
    pub const fn captured_at(&self) -> Instant {
        self.captured_at
    }

    /// Returns the time elapsed since capture.
    pub fn age(&self) -> Duration {
        self.captured_at.elapsed()
    }

    /// Returns true if the snapshot is no older than `max_staleness`.
    pub fn is_fresh(&self, max_staleness: Duration) -> bool {
        self.age() <= max_staleness
    }
}

/// State guarded by the refresh gate. Owning the fetcher here means a fetch can only happen
/// while the gate is held.
#[derive(Debug)]
struct RefreshGate<F> {
    fetcher: F,
    /// Number of refreshes completed so far.
    generation: u64,
    /// Outcome of the latest refresh, handed to callers that waited on it.
    last: Option<Result<Arc<CachedSnapshot>, ConstantsProviderError>>,
}

/// The [ConstantsProvider] fetches protocol constants through a [ConstantsFetcher], validates
/// them, and serves the last good snapshot to any number of concurrent readers.
///
/// At most one refresh runs at a time. A caller that finds the snapshot stale while another
/// refresh is in flight waits for that refresh and returns its outcome, so a burst of readers
/// results in a single fetch.
#[derive(Debug)]
pub struct ConstantsProvider<F> {
    /// The fetcher and the record of the latest refresh.
    gate: Mutex<RefreshGate<F>>,
    /// Mirror of the gate's generation, readable without taking the gate.
    generation: AtomicU64,
    /// The current snapshot. Replaced whole on every successful refresh.
    snapshot: watch::Sender<Option<Arc<CachedSnapshot>>>,
    /// The golden touch credential served to consumers.
    signer: GoldenTouchSigner,
    /// Provider tunables.
    config: ProviderConfig,
}

impl<F> ConstantsProvider<F>
where
    F: ConstantsFetcher + Send,
{
    /// Creates a new [ConstantsProvider] with an empty cache and the Taiko golden touch signer.
    pub fn new(fetcher: F, config: ProviderConfig) -> Self {
        let (snapshot, _) = watch::channel(None);
        Self {
            gate: Mutex::new(RefreshGate { fetcher, generation: 0, last: None }),
            generation: AtomicU64::new(0),
            snapshot,
            signer: GoldenTouchSigner::TAIKO,
            config,
        }
    }

    /// Replaces the golden touch credential served by the provider.
    pub fn with_signer(mut self, signer: GoldenTouchSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Returns the provider config.
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Returns the golden touch credential.
    pub const fn signer(&self) -> &GoldenTouchSigner {
        &self.signer
    }

    /// Returns the golden touch address.
    pub const fn signer_address(&self) -> Address {
        self.signer.address()
    }

    /// Returns the golden touch private key.
    pub const fn signer_key(&self) -> B256 {
        self.signer.private_key()
    }

    /// Returns the current snapshot without fetching.
    pub fn snapshot(&self) -> Option<Arc<CachedSnapshot>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribes to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<CachedSnapshot>>> {
        self.snapshot.subscribe()
    }

    /// Fetches and validates the constants, replacing the snapshot on success.
    ///
    /// On failure the snapshot is left as it was. Waits for any refresh already in flight
    /// before issuing its own fetch.
    pub async fn refresh(&self) -> Result<Arc<ProtocolConstants>, ConstantsProviderError> {
        let mut gate = self.gate.lock().await;
        self.refresh_locked(&mut gate).await.map(|snapshot| snapshot.constants())
    }

    /// Returns the constants if the snapshot is no older than `max_staleness`, refreshing
    /// otherwise.
    ///
    /// If a refresh completes while this call waits for the gate, its outcome is returned
    /// instead of fetching again. A failed refresh with no snapshot to fall back on is reported
    /// as [ConstantsProviderError::NoConstantsAvailable]. A failed refresh over a stale snapshot
    /// reports the refresh error; the stale value is never returned past its bound.
    pub async fn get(
        &self,
        max_staleness: Duration,
    ) -> Result<Arc<ProtocolConstants>, ConstantsProviderError> {
        let seen = self.generation.load(Ordering::Acquire);
        if let Some(snapshot) = self.snapshot().filter(|s| s.is_fresh(max_staleness)) {
            inc!(CONSTANTS_CACHE_HITS, &["constants_provider"]);
            return Ok(snapshot.constants());
        }

        let mut gate = self.gate.lock().await;
        let joined = (gate.generation != seen).then(|| gate.last.clone()).flatten();
        let outcome = match joined {
            Some(outcome) => {
                trace!(target: "constants_provider", "Joined refresh completed while waiting");
                outcome
            }
            None => self.refresh_locked(&mut gate).await,
        };
        drop(gate);

        match outcome {
            Ok(snapshot) => Ok(snapshot.constants()),
            Err(e) if self.snapshot().is_none() => {
                Err(ConstantsProviderError::NoConstantsAvailable(Box::new(e)))
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the constants within the configured staleness bound.
    pub async fn latest(&self) -> Result<Arc<ProtocolConstants>, ConstantsProviderError> {
        self.get(self.config.max_staleness).await
    }

    async fn refresh_locked(
        &self,
        gate: &mut RefreshGate<F>,
    ) -> Result<Arc<CachedSnapshot>, ConstantsProviderError> {
        inc!(CONSTANTS_FETCHES, &["constants_provider"]);
        timer!(START, CONSTANTS_REFRESH_TIME, &["constants_provider"], timer);

        let outcome = match self.fetch_validated(&mut gate.fetcher).await {
            Ok(constants) => {
                timer!(STOP, timer);
                let snapshot = Arc::new(CachedSnapshot::new(constants));
                self.snapshot.send_replace(Some(Arc::clone(&snapshot)));
                info!(
                    target: "constants_provider",
                    chain_id = %constants.chain_id,
                    "Refreshed protocol constants"
                );
                Ok(snapshot)
            }
            Err(e) => {
                timer!(DISCARD, timer);
                inc!(CONSTANTS_ERRORS, &["constants_provider", e.kind()]);
                if e.is_shape_mismatch() {
                    error!(
                        target: "constants_provider",
                        "Protocol constants do not match the expected schema, keeping snapshot: {}", e
                    );
                } else {
                    warn!(
                        target: "constants_provider",
                        "Failed to refresh protocol constants: {}", e
                    );
                }
                Err(e)
            }
        };

        gate.generation += 1;
        gate.last = Some(outcome.clone());
        self.generation.store(gate.generation, Ordering::Release);
        outcome
    }

    async fn fetch_validated(
        &self,
        fetcher: &mut F,
    ) -> Result<ProtocolConstants, ConstantsProviderError> {
        let raw = match timeout(self.config.fetch_timeout, fetcher.fetch_constants()).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                return Err(ConstantsProviderError::FetchFailed(format!(
                    "timed out after {:?}",
                    self.config.fetch_timeout
                )))
            }
        };
        debug!(target: "constants_provider", fields = raw.len(), "Fetched raw protocol constants");
        Ok(ProtocolConstants::try_from(&raw)?)
    }
}
