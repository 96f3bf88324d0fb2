//! Map container
//!
//! This module provides [`GuardedMap`], a keyed mapping guarded by a
//! reader/writer lock.
//!
//! ## When to use it
//!
//! - Shared key/value state mutated by several threads with mostly-read
//!   traffic
//! - Situations where a consistent whole-map view matters more than
//!   per-operation throughput (the lock covers each full operation,
//!   including scans)
//!
//! Key enumeration order is not specified and may differ between calls.

pub mod guarded;

pub use self::guarded::GuardedMap;


#[cfg(test)]
mod proptests;
