//! Manually advanced epoch/timestamp source.

use crate::domain::value_objects::{Epoch, Timestamp};
use crate::ports::outbound::EpochClock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A shared-handle clock: clones observe the same epoch and timestamp, so a
/// test or scheduler can keep a handle and advance it while the service holds
/// another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    inner: Arc<ClockInner>,
}

#[derive(Debug)]
struct ClockInner {
    epoch: AtomicU64,
    timestamp: AtomicU64,
}

impl ManualClock {
    /// Start at epoch 1 (live epochs never use the 0 sentinel), timestamp 0.
    pub fn new() -> Self {
        Self::at(1, 0)
    }

    pub fn at(epoch: Epoch, timestamp: Timestamp) -> Self {
        Self {
            inner: Arc::new(ClockInner {
                epoch: AtomicU64::new(epoch),
                timestamp: AtomicU64::new(timestamp),
            }),
        }
    }

    pub fn advance_epoch(&self) {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
    }

    pub fn advance_time(&self, seconds: u64) {
        self.inner.timestamp.fetch_add(seconds, Ordering::SeqCst);
    }

    pub fn set_epoch(&self, epoch: Epoch) {
        self.inner.epoch.store(epoch, Ordering::SeqCst);
    }

    pub fn set_time(&self, timestamp: Timestamp) {
        self.inner.timestamp.store(timestamp, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl EpochClock for ManualClock {
    fn current_epoch(&self) -> Epoch {
        self.inner.epoch.load(Ordering::SeqCst)
    }

    fn now(&self) -> Timestamp {
        self.inner.timestamp.load(Ordering::SeqCst)
    }
}
