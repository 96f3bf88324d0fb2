//! Reader/writer-lock guarded hash map
//!
//! ## Design
//!
//! The map wraps a lazily-allocated [`FxHashMap`] in a single
//! [`parking_lot::RwLock`]:
//!
//! - Read operations (`len`, `get`, `keys`, `values`, `scan`) take the lock
//!   in shared mode and treat absent backing storage as an empty map
//! - Write operations (`set`, `delete`, `clear`) take the lock in exclusive
//!   mode; `set` allocates the backing storage on first use
//! - The lock is held for an operation's entire duration, including the full
//!   body of a [`scan`](GuardedMap::scan) callback
//!
//! Construction never allocates; a fresh map costs one lock word and one
//! `None`.
//!
//! ## Locking hazards
//!
//! The lock is not re-entrant. A `scan` visitor that calls back into the
//! same map instance deadlocks, as does a visitor that blocks on another
//! thread which itself needs this map's lock. This is a caller obligation;
//! the map does not detect it.

use crate::metrics::{MetricsCollector, MetricsSnapshot, OpCounters};
use core::fmt;
use core::hash::Hash;
use fxhash::FxHashMap;
use parking_lot::RwLock;

/// A keyed mapping guarded by a reader/writer lock.
///
/// Keys are unique; enumeration order is unspecified. The backing storage is
/// allocated lazily on the first [`set`](GuardedMap::set), so constructing a
/// `GuardedMap` is free and a never-written map behaves exactly like an
/// empty one.
///
/// # Type Parameters
///
/// * `K` - key type, `Hash + Eq`
/// * `V` - value type; lookups additionally require `Clone` because values
///   are handed out as owned copies (a borrow could not outlive the lock
///   guard)
///
/// # Examples
///
/// ```rust
/// use guarded::GuardedMap;
///
/// let map: GuardedMap<&str, u32> = GuardedMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
/// assert_eq!(map.get(&"a"), Some(1));
/// assert_eq!(map.len(), 2);
/// assert!(map.delete(&"a"));
/// assert_eq!(map.get(&"a"), None);
/// ```
pub struct GuardedMap<K, V> {
    data: RwLock<Option<FxHashMap<K, V>>>,
    counters: OpCounters,
}

impl<K, V> GuardedMap<K, V>
where
    K: Hash + Eq,
{
    /// Create a new, empty map.
    ///
    /// Does not allocate; the backing storage appears on the first
    /// [`set`](GuardedMap::set).
    pub fn new() -> Self {
        Self {
            data: RwLock::new(None),
            counters: OpCounters::default(),
        }
    }

    /// Number of entries currently in the map.
    ///
    /// Takes the read lock.
    pub fn len(&self) -> usize {
        self.counters.record_read();
        let data = self.data.read();
        data.as_ref().map_or(0, FxHashMap::len)
    }

    /// Whether the map currently holds no entries.
    ///
    /// Takes the read lock.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a key, returning a clone of its value.
    ///
    /// Returns `None` if the key is absent or the map has never been written
    /// to. Absence is distinct from presence with a default value.
    ///
    /// Takes the read lock.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.counters.record_read();
        let data = self.data.read();
        data.as_ref().and_then(|map| map.get(key).cloned())
    }

    /// Insert a value, overwriting any previous value under the same key.
    ///
    /// Allocates the backing storage on the first call. Takes the write
    /// lock.
    pub fn set(&self, key: K, value: V) {
        self.counters.record_write();
        let mut data = self.data.write();
        data.get_or_insert_with(FxHashMap::default).insert(key, value);
    }

    /// Remove a key if present.
    ///
    /// Returns whether an entry was removed. Removing an absent key, or
    /// deleting from a never-written map, is a no-op that returns `false`,
    /// not an error.
    ///
    /// Takes the write lock.
    pub fn delete(&self, key: &K) -> bool {
        self.counters.record_write();
        let mut data = self.data.write();
        data.as_mut().is_some_and(|map| map.remove(key).is_some())
    }

    /// Remove all entries, keeping the allocated capacity.
    ///
    /// No-op on a never-written map. Takes the write lock.
    pub fn clear(&self) {
        self.counters.record_write();
        let mut data = self.data.write();
        if let Some(map) = data.as_mut() {
            map.clear();
        }
    }

    /// Snapshot of all keys, in arbitrary order.
    ///
    /// The returned vector is freshly allocated, its length equals
    /// [`len`](GuardedMap::len) at the moment the read lock was held, and it
    /// remains valid after the lock is released. A never-written map yields
    /// an empty vector.
    ///
    /// Takes the read lock once. A separate [`values`](GuardedMap::values)
    /// call takes its own lock acquisition, so the two snapshots need not
    /// correspond.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.counters.record_read();
        let data = self.data.read();
        data.as_ref()
            .map_or_else(Vec::new, |map| map.keys().cloned().collect())
    }

    /// Snapshot of all values, in arbitrary order.
    ///
    /// Same snapshot semantics as [`keys`](GuardedMap::keys); no ordering
    /// correspondence between separate `keys` and `values` calls is
    /// guaranteed.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.counters.record_read();
        let data = self.data.read();
        data.as_ref()
            .map_or_else(Vec::new, |map| map.values().cloned().collect())
    }

    /// Visit every entry, stopping early when the visitor returns `false`.
    ///
    /// Entries are visited in an implementation-defined order. The read lock
    /// is held for the entire scan, so the visitor sees a consistent view of
    /// the whole map at the cost of serializing with writers for the
    /// duration.
    ///
    /// The visitor must not call back into this map instance (the lock is
    /// not re-entrant; doing so deadlocks) and must not block indefinitely,
    /// as it holds up every writer and, transitively, future readers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded::GuardedMap;
    ///
    /// let map = GuardedMap::new();
    /// map.set(1, "one");
    /// map.set(2, "two");
    ///
    /// let mut seen = 0;
    /// map.scan(|_key, _value| {
    ///     seen += 1;
    ///     true
    /// });
    /// assert_eq!(seen, 2);
    /// ```
    pub fn scan<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.counters.record_read();
        let data = self.data.read();
        if let Some(map) = data.as_ref() {
            for (key, value) in map.iter() {
                if !visit(key, value) {
                    return;
                }
            }
        }
    }
}

impl<K, V> Default for GuardedMap<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for GuardedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // try_read avoids deadlocking when a guard is held on this thread
        match self.data.try_read() {
            Some(data) => f
                .debug_struct("GuardedMap")
                .field("len", &data.as_ref().map_or(0, FxHashMap::len))
                .finish(),
            None => f.debug_struct("GuardedMap").field("len", &"<locked>").finish(),
        }
    }
}

impl<K, V> MetricsCollector for GuardedMap<K, V> {
    fn metrics(&self) -> MetricsSnapshot {
        self.counters.snapshot()
    }

    fn reset_metrics(&self) {
        self.counters.reset();
    }
}
