//! A `tracing-subscriber` layer that records emitted events, so tests can assert on what the
//! provider logged.

use spin::Mutex;
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

/// Events recorded by a [CollectingLayer], as `(level, formatted event)` pairs.
#[derive(Debug, Default, Clone)]
pub struct TraceStorage(pub Arc<Mutex<Vec<(Level, String)>>>);

impl TraceStorage {
    /// Returns the formatted events recorded at `level`.
    pub fn get_by_level(&self, level: Level) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter_map(|(l, message)| (*l == level).then(|| message.clone()))
            .collect()
    }
}

/// Layer that pushes every event it sees into a shared [TraceStorage].
#[derive(Debug, Default)]
pub struct CollectingLayer {
    /// Where events are recorded.
    pub storage: TraceStorage,
}

impl CollectingLayer {
    /// Creates a layer recording into `storage`.
    pub const fn new(storage: TraceStorage) -> Self {
        Self { storage }
    }
}

impl<S: Subscriber> Layer<S> for CollectingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        let message = format!("{:?}", event);
        self.storage.0.lock().push((level, message));
    }
}
