//! Sequence container
//!
//! This module provides [`GuardedVec`], a dense, index-addressable sequence
//! guarded by a reader/writer lock, with in-place sorting.
//!
//! One deliberate quirk worth knowing up front:
//! [`clear`](GuardedVec::clear) resets every element slot to its default
//! value but does NOT change the length. See the method docs.

pub mod guarded;

pub use self::guarded::GuardedVec;


#[cfg(test)]
mod proptests;
