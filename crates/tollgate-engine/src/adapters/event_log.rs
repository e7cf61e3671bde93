//! Recording event sink.

use crate::events::EngineEvent;
use crate::ports::outbound::EventSink;
use std::sync::{Arc, Mutex};

/// Shared-handle event log: clones observe the same stream, so a test or
/// downstream indexer can keep a handle while the service publishes through
/// another.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    inner: Arc<Mutex<Vec<EngineEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event published so far, oldest first.
    pub fn snapshot(&self) -> Vec<EngineEvent> {
        self.inner.lock().map(|events| events.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for EventLog {
    fn publish(&mut self, event: EngineEvent) {
        if let Ok(mut events) = self.inner.lock() {
            events.push(event);
        }
    }
}
