//! Fixed-capacity circular queue
//!
//! The unchecked baseline: `enqueue` never looks at the remaining space.

use super::policy::{Compare, Wrap};
use super::repr::Repr;
use super::ring::Ring;
use super::Queue;
use crate::{util, Result};

/// A circular buffer over a store allocated once at construction
///
/// The capacity is rounded up to a power of two and never changes.
///
/// # Overflow
///
/// `enqueue` performs **no** capacity check. Writing more elements than the
/// capacity without draining overwrites the oldest live slots, and `len` keeps
/// counting past the capacity. Subsequent dequeues walk the ring `len` times,
/// returning overwritten slots again: stale values under [`Inline`], the
/// empty marker under [`Boxed`] once a slot's box has already been taken.
/// Callers must keep `len() <= capacity()` themselves; use
/// [`GrowableQueue`](super::GrowableQueue) when that cannot be guaranteed.
///
/// [`Inline`]: super::Inline
/// [`Boxed`]: super::Boxed
///
/// # Examples
///
/// ```rust
/// use seqqueue::queue::{FixedInline, Inline, Queue};
///
/// let mut queue = FixedInline::new(3);
/// assert_eq!(queue.capacity(), 4);
///
/// queue.enqueue(10);
/// queue.enqueue(20);
/// assert_eq!(queue.dequeue(), 10);
/// assert_eq!(queue.dequeue(), 20);
/// assert_eq!(queue.dequeue(), Inline::SENTINEL);
/// ```
pub struct FixedCapacityQueue<R: Repr, W: Wrap = Compare> {
    ring: Ring<R, W>,
}

impl<R: Repr, W: Wrap> FixedCapacityQueue<R, W> {
    /// Create a queue holding `capacity` elements, rounded up to a power of two
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows `usize`.
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Ring::new(capacity),
        }
    }

    /// Fallible form of [`new`](Self::new)
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`](crate::Error::CapacityOverflow) when the
    /// rounded capacity does not fit in `usize`,
    /// [`Error::AllocationFailed`](crate::Error::AllocationFailed) when the store
    /// cannot be allocated.
    pub fn try_new(capacity: usize) -> Result<Self> {
        Ok(Self {
            ring: Ring::try_new(capacity)?,
        })
    }

    /// Number of slots in the store
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Append `value` at the tail without checking for space
    #[inline]
    pub fn enqueue(&mut self, value: i32) {
        self.ring.write(value);
    }

    /// Remove the oldest element, or return the empty marker
    #[inline]
    pub fn dequeue(&mut self) -> R::Output {
        self.ring.read()
    }

    /// Number of elements counted in
    ///
    /// Exceeds [`capacity`](Self::capacity) after an overflow.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }
}

impl<R: Repr, W: Wrap> Default for FixedCapacityQueue<R, W> {
    fn default() -> Self {
        Self::new(util::DEFAULT_CAPACITY)
    }
}

impl<R: Repr, W: Wrap> Queue for FixedCapacityQueue<R, W> {
    type Output = R::Output;

    #[inline]
    fn enqueue(&mut self, value: i32) {
        FixedCapacityQueue::enqueue(self, value)
    }

    #[inline]
    fn dequeue(&mut self) -> R::Output {
        FixedCapacityQueue::dequeue(self)
    }

    #[inline]
    fn len(&self) -> usize {
        FixedCapacityQueue::len(self)
    }
}

impl<R: Repr, W: Wrap> core::fmt::Debug for FixedCapacityQueue<R, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedCapacityQueue")
            .field("ring", &self.ring)
            .finish()
    }
}
