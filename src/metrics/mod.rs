//! Operation metrics
//!
//! Lightweight operation counters shared by all Guarded containers. Every
//! container keeps a pair of relaxed atomic counters and bumps one per
//! operation, giving an approximate view of the read/write mix without
//! affecting the locking behavior being measured.
//!
//! Counts are updated with `Relaxed` ordering and may be momentarily stale
//! under contention; they are intended for capacity planning and contention
//! diagnosis, not for synchronization.

use core::sync::atomic::{AtomicU64, Ordering};

/// A point-in-time view of a container's operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Operations that took the lock in shared (read) mode.
    pub read_ops: u64,
    /// Operations that took the lock in exclusive (write) mode.
    pub write_ops: u64,
}

impl MetricsSnapshot {
    /// Total operations observed.
    pub fn total_ops(&self) -> u64 {
        self.read_ops + self.write_ops
    }

    /// Fraction of operations that were reads, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` for a container that has seen no operations.
    pub fn read_ratio(&self) -> f64 {
        let total = self.total_ops();
        if total == 0 {
            0.0
        } else {
            self.read_ops as f64 / total as f64
        }
    }
}

/// Interface for reading and resetting a container's operation counters.
pub trait MetricsCollector {
    /// Take a snapshot of the current counters.
    fn metrics(&self) -> MetricsSnapshot;

    /// Reset both counters to zero.
    fn reset_metrics(&self);
}

/// Internal atomic counter pair embedded in each container.
#[derive(Debug, Default)]
pub(crate) struct OpCounters {
    reads: AtomicU64,
    writes: AtomicU64,
}

impl OpCounters {
    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            read_ops: self.reads.load(Ordering::Relaxed),
            write_ops: self.writes.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn reset(&self) {
        self.reads.store(0, Ordering::Relaxed);
        self.writes.store(0, Ordering::Relaxed);
    }
}
