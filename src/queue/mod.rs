//! Queue implementations
//!
//! Every queue here implements the same [`Queue`] contract and differs only in
//! how it lays its elements out in memory.
//!
//! ## Available Queues
//!
//! - [`FixedCapacityQueue`]: circular buffer, fixed power-of-two store, no overflow check
//! - [`GrowableQueue`]: circular buffer that doubles when full and, by default, never shrinks
//! - [`LinkedQueue`]: one heap node per element
//! - [`SegmentedQueue`]: linked chain of fixed-size array segments
//!
//! Each is generic over a [`Repr`], either [`Inline`] or [`Boxed`], and the
//! array-backed ones additionally over a [`Wrap`] index rule.
//!
//! ## Performance Characteristics
//!
//! | Queue | Enqueue | Dequeue | Allocations |
//! |-------|---------|---------|-------------|
//! | Fixed | O(1) | O(1) | store once |
//! | Growable | O(1) amortized | O(1) | store on each doubling |
//! | Linked | O(1) | O(1) | one node per element |
//! | Segmented | O(1) | O(1) | one segment per `segment_capacity` elements |
//!
//! [`Boxed`] adds one allocation per element to every row.
//!
//! ## Examples
//!
//! ```rust
//! use seqqueue::queue::{Boxed, Inline, Queue, Strategy};
//!
//! let mut queue = "linked".parse::<Strategy>()?.build::<Inline>(16);
//! queue.enqueue(7);
//! assert_eq!(queue.dequeue(), 7);
//!
//! let mut queue = Strategy::Growable.build::<Boxed>(1);
//! queue.enqueue(-1);
//! assert_eq!(queue.dequeue(), Some(-1));
//!
//! # Ok::<(), seqqueue::Error>(())
//! ```

pub mod fixed;
pub mod growable;
pub mod linked;
pub mod policy;
pub mod repr;
mod ring;
pub mod segmented;

pub use fixed::FixedCapacityQueue;
pub use growable::GrowableQueue;
pub use linked::LinkedQueue;
pub use policy::{Compare, Mask, Modulo, NeverShrink, QuarterShrink, Shrink, Wrap};
pub use repr::{Boxed, Inline, Repr};
pub use segmented::SegmentedQueue;

use crate::Error;
use alloc::boxed::Box;

/// The FIFO contract shared by every storage strategy
pub trait Queue {
    /// What `dequeue` returns, including the empty marker
    type Output;

    /// Append `value` at the back
    fn enqueue(&mut self, value: i32);

    /// Remove and return the front value, or the empty marker
    fn dequeue(&mut self) -> Self::Output;

    /// Number of elements in the queue
    fn len(&self) -> usize;

    /// Whether the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<Q: Queue + ?Sized> Queue for Box<Q> {
    type Output = Q::Output;

    #[inline]
    fn enqueue(&mut self, value: i32) {
        (**self).enqueue(value)
    }

    #[inline]
    fn dequeue(&mut self) -> Q::Output {
        (**self).dequeue()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// Fixed-capacity queue over inline `i32` slots
pub type FixedInline = FixedCapacityQueue<Inline>;
/// Fixed-capacity queue over boxed `i32` slots
pub type FixedBoxed = FixedCapacityQueue<Boxed>;
/// Growable queue over inline `i32` slots
pub type GrowableInline = GrowableQueue<Inline>;
/// Growable queue over boxed `i32` slots
pub type GrowableBoxed = GrowableQueue<Boxed>;
/// Linked queue with inline `i32` nodes
pub type LinkedInline = LinkedQueue<Inline>;
/// Linked queue with boxed `i32` nodes
pub type LinkedBoxed = LinkedQueue<Boxed>;
/// Segmented queue over inline `i32` slots
pub type SegmentedInline = SegmentedQueue<Inline>;
/// Segmented queue over boxed `i32` slots
pub type SegmentedBoxed = SegmentedQueue<Boxed>;

/// Storage strategy picked at runtime, e.g. from a benchmark parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`FixedCapacityQueue`]
    Fixed,
    /// [`GrowableQueue`]
    Growable,
    /// [`LinkedQueue`]
    Linked,
    /// [`SegmentedQueue`]
    Segmented,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 4] = [
        Strategy::Fixed,
        Strategy::Growable,
        Strategy::Linked,
        Strategy::Segmented,
    ];

    /// Lowercase name accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Fixed => "fixed",
            Strategy::Growable => "growable",
            Strategy::Linked => "linked",
            Strategy::Segmented => "segmented",
        }
    }

    /// Build an empty queue of this strategy over representation `R`
    ///
    /// `capacity` is the store size for array queues, the segment size for
    /// [`SegmentedQueue`], and ignored by [`LinkedQueue`]. Wrap and shrink
    /// policies are the defaults.
    ///
    /// # Panics
    ///
    /// Panics if an array capacity rounds past `usize::MAX`.
    pub fn build<R: Repr + 'static>(self, capacity: usize) -> Box<dyn Queue<Output = R::Output>> {
        match self {
            Strategy::Fixed => Box::new(FixedCapacityQueue::<R>::new(capacity)),
            Strategy::Growable => Box::new(GrowableQueue::<R>::new(capacity)),
            Strategy::Linked => Box::new(LinkedQueue::<R>::with_capacity(capacity)),
            Strategy::Segmented => Box::new(SegmentedQueue::<R>::new(capacity)),
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

impl core::str::FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::UnknownStrategy)
    }
}


#[cfg(test)]
mod proptests;
