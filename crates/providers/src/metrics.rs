//! Metrics for the constants provider.

use lazy_static::lazy_static;
use prometheus::{self, register_counter_vec, register_histogram_vec, CounterVec, HistogramVec};

const RESPONSE_TIME_CUSTOM_BUCKETS: &[f64; 14] =
    &[0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0];

lazy_static! {
    /// Tracks the number of constants fetches issued to the source.
    pub static ref CONSTANTS_FETCHES: CounterVec = register_counter_vec!(
        "taiko_constants_fetches",
        "Number of constants fetches issued to the source",
        &["provider"]
    ).expect("Constants Fetches failed to register");

    /// Tracks the number of failed refreshes, by error kind.
    pub static ref CONSTANTS_ERRORS: CounterVec = register_counter_vec!(
        "taiko_constants_errors",
        "Number of failed constants refreshes",
        &["provider", "error"]
    ).expect("Constants Errors failed to register");

    /// Tracks the number of reads served from the cached snapshot.
    pub static ref CONSTANTS_CACHE_HITS: CounterVec = register_counter_vec!(
        "taiko_constants_cache_hits",
        "Number of constants reads served from the cache",
        &["provider"]
    ).expect("Constants Cache Hits failed to register");

    /// Tracks the time taken to fetch and validate the constants.
    pub static ref CONSTANTS_REFRESH_TIME: HistogramVec = register_histogram_vec!(
        "taiko_constants_refresh_time_seconds",
        "Constants refresh times",
        &["provider"],
        RESPONSE_TIME_CUSTOM_BUCKETS.to_vec()
    )
    .expect("Failed to register histogram vec");
}
