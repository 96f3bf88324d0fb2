//! # Guarded
//!
//! A small library of generic, concurrency-safe container primitives, each
//! guarded by a reader/writer lock so that many concurrent readers or one
//! exclusive writer may access the underlying data without data races.
//!
//! ## Containers
//!
//! - [`GuardedMap`]: keyed mapping, unique keys, no iteration-order guarantee
//! - [`GuardedVec`]: index-addressable dense sequence with in-place sort
//! - [`GuardedCell`]: single mutable value slot with atomic load/store/swap
//!
//! ## Philosophy
//!
//! Guarded targets code that shares mutable collections across concurrent
//! workers without building ad-hoc locking around plain collections each
//! time. It deliberately stays simple:
//!
//! - One [`parking_lot::RwLock`] per container, held for the full duration of
//!   every operation
//! - Lazy allocation: constructing a container never allocates; the backing
//!   storage appears on the first write
//! - Callback-based snapshot iteration with caller-driven early exit
//! - Total operations: out-of-range and absent-key accesses answer with
//!   `None`/`false`, never a panic or an error type
//!
//! ## Quick Start
//!
//! ```rust
//! use guarded::GuardedMap;
//!
//! let map = GuardedMap::new();
//! map.set("answer", 42);
//! assert_eq!(map.get(&"answer"), Some(42));
//! assert_eq!(map.len(), 1);
//! ```
//!
//! ## Thread Safety
//!
//! All containers are `Send + Sync` (given `Send + Sync` element types) and
//! can be shared across threads behind an `Arc` without additional
//! synchronization. Read-only operations take shared lock access and run
//! concurrently with each other; mutating operations take exclusive access.
//!
//! ## What Guarded is not
//!
//! No operation ever waits for another mutation beyond ordinary lock
//! contention, no iterator object outlives a single call, and no
//! cross-operation atomicity is provided: a `get` followed by a `set` is a
//! classic check-then-act race. Only [`GuardedCell::swap`] combines a read
//! and a write into one critical section.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod cell;
pub mod map;
pub mod metrics;
pub mod vec;

pub use crate::cell::GuardedCell;
pub use crate::map::GuardedMap;
pub use crate::metrics::{MetricsCollector, MetricsSnapshot};
pub use crate::vec::GuardedVec;
