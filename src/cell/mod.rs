//! Cell container
//!
//! This module provides [`GuardedCell`], a single mutable value slot guarded
//! by a reader/writer lock. Its [`swap`](GuardedCell::swap) is the one
//! composite read-then-write operation in this crate that happens inside a
//! single critical section.

pub mod guarded;

pub use self::guarded::GuardedCell;
