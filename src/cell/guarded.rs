//! Reader/writer-lock guarded value slot

use crate::metrics::{MetricsCollector, MetricsSnapshot, OpCounters};
use core::fmt;
use core::mem;
use parking_lot::RwLock;

/// A single mutable value guarded by a reader/writer lock.
///
/// Holds `T::default()` until the first [`store`](GuardedCell::store). There
/// is no lazy allocation here; the slot always contains a value.
///
/// Unlike the map and vec, the cell offers one composite atomic operation:
/// [`swap`](GuardedCell::swap) replaces the value and returns the old one in
/// a single write-lock critical section, so concurrent swappers can never
/// lose an update the way a separate `load` followed by `store` would.
///
/// # Examples
///
/// ```rust
/// use guarded::GuardedCell;
///
/// let cell: GuardedCell<u32> = GuardedCell::new();
/// assert_eq!(cell.load(), 0);
/// cell.store(7);
/// assert_eq!(cell.swap(9), 7);
/// assert_eq!(cell.load(), 9);
/// ```
pub struct GuardedCell<T> {
    data: RwLock<T>,
    counters: OpCounters,
}

impl<T> GuardedCell<T> {
    /// Create a cell holding `T::default()`.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            data: RwLock::new(T::default()),
            counters: OpCounters::default(),
        }
    }

    /// Get a clone of the current value.
    ///
    /// Takes the read lock.
    pub fn load(&self) -> T
    where
        T: Clone,
    {
        self.counters.record_read();
        self.data.read().clone()
    }

    /// Replace the current value.
    ///
    /// Takes the write lock.
    pub fn store(&self, value: T) {
        self.counters.record_write();
        *self.data.write() = value;
    }

    /// Replace the current value and return the previous one.
    ///
    /// The replacement happens in ONE write-lock critical section, never as
    /// a separate load followed by a store, so interleaved `swap` calls from
    /// concurrent threads always hand each value to exactly one caller.
    pub fn swap(&self, new: T) -> T {
        self.counters.record_write();
        let mut data = self.data.write();
        mem::replace(&mut *data, new)
    }
}

impl<T: Default> Default for GuardedCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for GuardedCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_read() {
            Some(_) => f.debug_struct("GuardedCell").finish_non_exhaustive(),
            None => f
                .debug_struct("GuardedCell")
                .field("state", &"<locked>")
                .finish(),
        }
    }
}

impl<T> MetricsCollector for GuardedCell<T> {
    fn metrics(&self) -> MetricsSnapshot {
        self.counters.snapshot()
    }

    fn reset_metrics(&self) {
        self.counters.reset();
    }
}
