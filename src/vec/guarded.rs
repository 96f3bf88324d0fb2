//! Reader/writer-lock guarded vector
//!
//! ## Design
//!
//! Same shape as the map: a lazily-allocated `Vec<T>` behind one
//! [`parking_lot::RwLock`]. Valid indices are always `[0, len())` and the
//! sequence is dense. Out-of-range access is answered with `None`/`false`,
//! never a panic.
//!
//! Mutators that grow or reorder the sequence (`push`, `append`, `sort_by`)
//! return `&Self` so calls can be chained:
//!
//! ```rust
//! use guarded::GuardedVec;
//!
//! let vec = GuardedVec::new();
//! vec.append([3, 1, 2]).sort_by(|a, b| a.cmp(b));
//! assert_eq!(vec.get(0), Some(1));
//! ```
//!
//! The locking hazards are the same as the map's: a
//! [`scan`](GuardedVec::scan) visitor must not re-enter this instance.

use crate::metrics::{MetricsCollector, MetricsSnapshot, OpCounters};
use core::cmp::Ordering;
use core::fmt;
use parking_lot::RwLock;

/// A dense, 0-based, index-addressable sequence guarded by a reader/writer
/// lock.
///
/// The backing storage is allocated lazily on the first
/// [`push`](GuardedVec::push) or [`append`](GuardedVec::append);
/// constructing a `GuardedVec` is free and a never-written sequence behaves
/// exactly like an empty one.
///
/// # Examples
///
/// ```rust
/// use guarded::GuardedVec;
///
/// let vec = GuardedVec::new();
/// vec.append(["a", "b", "c"]);
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.get(1), Some("b"));
/// assert_eq!(vec.get(3), None);
/// assert!(vec.set(0, "z"));
/// assert!(!vec.set(9, "nope"));
/// ```
pub struct GuardedVec<T> {
    data: RwLock<Option<Vec<T>>>,
    counters: OpCounters,
}

impl<T> GuardedVec<T> {
    /// Create a new, empty sequence.
    ///
    /// Does not allocate; the backing storage appears on the first write.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(None),
            counters: OpCounters::default(),
        }
    }

    /// Number of elements currently in the sequence.
    ///
    /// Takes the read lock.
    pub fn len(&self) -> usize {
        self.counters.record_read();
        let data = self.data.read();
        data.as_ref().map_or(0, Vec::len)
    }

    /// Whether the sequence currently holds no elements.
    ///
    /// Takes the read lock.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a clone of the element at `index`.
    ///
    /// Returns `None` for any index outside `[0, len())`; never panics.
    /// Takes the read lock.
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.counters.record_read();
        let data = self.data.read();
        data.as_ref().and_then(|vec| vec.get(index).cloned())
    }

    /// Overwrite the element at `index`, reporting whether it was in range.
    ///
    /// An out-of-range index is a silent no-op returning `false`, not an
    /// error; the sequence never grows through `set`. Takes the write lock.
    pub fn set(&self, index: usize, value: T) -> bool {
        self.counters.record_write();
        let mut data = self.data.write();
        match data.as_mut().and_then(|vec| vec.get_mut(index)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Append a single element to the end.
    ///
    /// Allocates the backing storage on first use and returns `&Self` for
    /// chaining. Takes the write lock.
    pub fn push(&self, value: T) -> &Self {
        self.counters.record_write();
        let mut data = self.data.write();
        data.get_or_insert_with(Vec::new).push(value);
        self
    }

    /// Append zero or more elements to the end, in iteration order.
    ///
    /// Allocates the backing storage on first use, even when the iterator is
    /// empty. Returns `&Self` for chaining. Takes the write lock for the
    /// whole append.
    pub fn append<I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = T>,
    {
        self.counters.record_write();
        let mut data = self.data.write();
        data.get_or_insert_with(Vec::new).extend(values);
        self
    }

    /// Reset every existing element slot to `T::default()` WITHOUT changing
    /// the length.
    ///
    /// This is "clear contents, keep length", NOT truncation: `len()` is
    /// identical before and after, and every in-range index remains
    /// addressable (now holding a default value). Callers wanting an empty
    /// sequence should build a new `GuardedVec` instead. No-op on a
    /// never-written sequence.
    ///
    /// Takes the write lock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guarded::GuardedVec;
    ///
    /// let vec = GuardedVec::new();
    /// vec.append([7, 8, 9]);
    /// vec.clear();
    /// assert_eq!(vec.len(), 3);          // length preserved
    /// assert_eq!(vec.get(0), Some(0));   // slots reset to default
    /// ```
    pub fn clear(&self)
    where
        T: Default,
    {
        self.counters.record_write();
        let mut data = self.data.write();
        if let Some(vec) = data.as_mut() {
            for slot in vec.iter_mut() {
                *slot = T::default();
            }
        }
    }

    /// Visit elements in index order `0..len()`, stopping early when the
    /// visitor returns `false`.
    ///
    /// The read lock is held for the entire scan; the visitor must not call
    /// back into this sequence instance (the lock is not re-entrant) and
    /// must not block indefinitely.
    pub fn scan<F>(&self, mut visit: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        self.counters.record_read();
        let data = self.data.read();
        if let Some(vec) = data.as_ref() {
            for (index, elem) in vec.iter().enumerate() {
                if !visit(index, elem) {
                    return;
                }
            }
        }
    }

    /// Sort the sequence in place under a caller-supplied comparator.
    ///
    /// Only final sortedness under `compare` is guaranteed; the sort is
    /// unstable (equal elements may be reordered). The write lock is held
    /// for the entire O(n log n) sort. Returns `&Self` for chaining. No-op
    /// on a never-written sequence.
    pub fn sort_by<F>(&self, compare: F) -> &Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.counters.record_write();
        let mut data = self.data.write();
        if let Some(vec) = data.as_mut() {
            vec.sort_unstable_by(compare);
        }
        self
    }
}

impl<T> Default for GuardedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for GuardedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_read() {
            Some(data) => f
                .debug_struct("GuardedVec")
                .field("len", &data.as_ref().map_or(0, Vec::len))
                .finish(),
            None => f.debug_struct("GuardedVec").field("len", &"<locked>").finish(),
        }
    }
}

impl<T> MetricsCollector for GuardedVec<T> {
    fn metrics(&self) -> MetricsSnapshot {
        self.counters.snapshot()
    }

    fn reset_metrics(&self) {
        self.counters.reset();
    }
}
