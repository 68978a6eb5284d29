//! Macros for recording provider metrics.

/// Starts, records or discards a refresh latency timer.
#[macro_export]
macro_rules! timer {
    (START, $metric:ident, $labels:expr, $timer:ident) => {
        #[cfg(feature = "metrics")]
        let $timer = $crate::metrics::$metric.with_label_values($labels).start_timer();
    };
    (DISCARD, $timer:ident) => {
        #[cfg(feature = "metrics")]
        $timer.stop_and_discard();
    };
    (STOP, $timer:ident) => {
        #[cfg(feature = "metrics")]
        $timer.stop_and_record();
    };
}

/// Increments a labelled provider counter.
#[macro_export]
macro_rules! inc {
    ($metric:ident, $labels:expr) => {
        #[cfg(feature = "metrics")]
        $crate::metrics::$metric.with_label_values($labels).inc();
    };
}
