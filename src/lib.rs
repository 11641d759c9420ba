//! # seqqueue
//!
//! Single-threaded FIFO queues in several storage strategies, built so the same
//! abstract data type can be benchmarked side by side in different memory layouts.
//!
//! ## Strategies
//!
//! - **Fixed capacity**: circular buffer over a pre-allocated store, no growth and
//!   no overflow check
//! - **Growable**: the same circular buffer with amortized doubling
//! - **Linked**: one heap node per element, O(1) append through a tail pointer
//! - **Segmented**: a linked chain of fixed-size array segments
//!
//! Every strategy is available over two element representations:
//!
//! - [`Inline`](queue::Inline): values live directly in the store; an empty queue
//!   reports the sentinel [`Inline::SENTINEL`](queue::Inline::SENTINEL)
//! - [`Boxed`](queue::Boxed): every value is individually allocated; an empty
//!   queue reports `None`
//!
//! ## Quick Start
//!
//! ```rust
//! use seqqueue::queue::{GrowableBoxed, GrowableInline, Inline, Queue};
//!
//! let mut inline = GrowableInline::new(4);
//! inline.enqueue(42);
//! assert_eq!(inline.dequeue(), 42);
//! assert_eq!(inline.dequeue(), Inline::SENTINEL);
//!
//! let mut boxed = GrowableBoxed::new(4);
//! boxed.enqueue(-1);
//! assert_eq!(boxed.dequeue(), Some(-1));
//! assert_eq!(boxed.dequeue(), None);
//! ```
//!
//! ## Thread Safety
//!
//! None of the queues synchronize. Each instance is meant to be owned by a
//! single caller for its whole lifetime.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(feature = "unstable", feature(doc_cfg))]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

extern crate alloc;

pub mod queue;

pub use crate::queue::{
    FixedCapacityQueue, GrowableQueue, LinkedQueue, Queue, SegmentedQueue, Strategy,
};

/// Capacity helpers shared by the array-backed queues
pub mod util {
    use crate::{Error, Result};

    /// Capacity hint used when a queue is built without one
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Round a requested capacity up to the smallest power of two, minimum 1
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] when no power of two that large fits in
    /// `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqqueue::util::try_capacity_for;
    ///
    /// assert_eq!(try_capacity_for(0), Ok(1));
    /// assert_eq!(try_capacity_for(5), Ok(8));
    /// assert_eq!(try_capacity_for(16), Ok(16));
    /// ```
    #[inline]
    pub const fn try_capacity_for(requested: usize) -> Result<usize> {
        let requested = if requested == 0 { 1 } else { requested };
        match requested.checked_next_power_of_two() {
            Some(capacity) => Ok(capacity),
            None => Err(Error::CapacityOverflow),
        }
    }

    /// Infallible form of [`try_capacity_for`]
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" under the same condition `Vec` does.
    #[inline]
    pub const fn capacity_for(requested: usize) -> usize {
        match try_capacity_for(requested) {
            Ok(capacity) => capacity,
            Err(_) => panic!("capacity overflow"),
        }
    }
}

/// Error types for seqqueue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A requested or doubled capacity does not fit in `usize`
    CapacityOverflow,
    /// The allocator refused to provide a backing store
    AllocationFailed,
    /// A strategy name did not match any known strategy
    UnknownStrategy,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::CapacityOverflow => write!(f, "Capacity overflow"),
            Error::AllocationFailed => write!(f, "Backing store allocation failed"),
            Error::UnknownStrategy => write!(f, "Unknown queue strategy"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "unstable", doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

impl From<alloc::collections::TryReserveError> for Error {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Error::AllocationFailed
    }
}

/// Result type for seqqueue operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_rounding() {
        assert_eq!(util::capacity_for(0), 1);
        assert_eq!(util::capacity_for(1), 1);
        assert_eq!(util::capacity_for(2), 2);
        assert_eq!(util::capacity_for(3), 4);
        assert_eq!(util::capacity_for(16), 16);
        assert_eq!(util::capacity_for(17), 32);
        assert_eq!(util::capacity_for(1000), 1024);
    }

    #[test]
    fn test_capacity_overflow() {
        assert_eq!(
            util::try_capacity_for(usize::MAX),
            Err(Error::CapacityOverflow)
        );
        assert_eq!(
            util::try_capacity_for(usize::MAX / 2 + 1),
            Ok(usize::MAX / 2 + 1)
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_capacity_for_panics_on_overflow() {
        util::capacity_for(usize::MAX);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::CapacityOverflow.to_string(), "Capacity overflow");
        assert_eq!(
            Error::AllocationFailed.to_string(),
            "Backing store allocation failed"
        );
        assert_eq!(Error::UnknownStrategy.to_string(), "Unknown queue strategy");
    }

    #[test]
    fn test_try_reserve_error_converts() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(Error::from(err), Error::AllocationFailed);
    }
}
