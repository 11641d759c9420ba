//! Growable circular queue
//!
//! Same ring as [`FixedCapacityQueue`](super::FixedCapacityQueue) plus a
//! doubling step when an `enqueue` finds the store full:
//!
//! ```text
//! before (C = 4, full)          after (C = 8)
//! [ c | d | a | b ]             [ a | b | c | d | . | . | . | . ]
//!       ^head/tail                ^head           ^tail
//! ```
//!
//! With the default [`NeverShrink`] policy the store is never given back.

use super::policy::{Compare, NeverShrink, Shrink, Wrap};
use super::repr::Repr;
use super::ring::Ring;
use super::Queue;
use crate::{util, Error, Result};
use core::marker::PhantomData;
use log::debug;

/// A circular queue that doubles its store whenever it fills up
///
/// # Examples
///
/// ```rust
/// use seqqueue::queue::{GrowableBoxed, Queue};
///
/// let mut queue = GrowableBoxed::new(2);
/// for value in 0..5 {
///     queue.enqueue(value);
/// }
/// assert_eq!(queue.capacity(), 8);
/// assert_eq!(queue.grow_count(), 2);
///
/// for expected in 0..5 {
///     assert_eq!(queue.dequeue(), Some(expected));
/// }
/// assert_eq!(queue.dequeue(), None);
/// assert_eq!(queue.capacity(), 8);
/// ```
pub struct GrowableQueue<R: Repr, W: Wrap = Compare, S: Shrink = NeverShrink> {
    ring: Ring<R, W>,
    grow_count: usize,
    shrink_count: usize,
    _shrink: PhantomData<fn() -> S>,
}

impl<R: Repr, W: Wrap, S: Shrink> GrowableQueue<R, W, S> {
    /// Create a queue with `capacity` rounded up to a power of two
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows `usize`.
    pub fn new(capacity: usize) -> Self {
        Self::from_ring(Ring::new(capacity))
    }

    /// Fallible form of [`new`](Self::new)
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] or [`Error::AllocationFailed`].
    pub fn try_new(capacity: usize) -> Result<Self> {
        Ok(Self::from_ring(Ring::try_new(capacity)?))
    }

    fn from_ring(ring: Ring<R, W>) -> Self {
        Self {
            ring,
            grow_count: 0,
            shrink_count: 0,
            _shrink: PhantomData,
        }
    }

    /// Number of slots in the current store
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// How many times the store has doubled
    #[inline]
    pub fn grow_count(&self) -> usize {
        self.grow_count
    }

    /// How many times the shrink policy has halved the store
    #[inline]
    pub fn shrink_count(&self) -> usize {
        self.shrink_count
    }

    /// Append `value`, doubling the store first if it is full
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`. Allocation failure
    /// aborts, as with `Vec`.
    #[inline]
    pub fn enqueue(&mut self, value: i32) {
        if self.ring.is_full() {
            self.grow();
        }
        self.ring.write(value);
    }

    /// Append `value`, reporting a failed doubling instead of aborting
    ///
    /// On error the queue is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityOverflow`] or [`Error::AllocationFailed`].
    pub fn try_enqueue(&mut self, value: i32) -> Result<()> {
        if self.ring.is_full() {
            let capacity = self.doubled()?;
            self.ring.try_relocate(capacity)?;
            self.grown(capacity);
        }
        self.ring.write(value);
        Ok(())
    }

    /// Remove the oldest element, or return the empty marker
    #[inline]
    pub fn dequeue(&mut self) -> R::Output {
        let len = self.ring.len();
        let value = self.ring.read();
        if len != 0 {
            if let Some(capacity) = S::shrink_to(self.ring.len(), self.ring.capacity()) {
                self.shrink(capacity);
            }
        }
        value
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    fn doubled(&self) -> Result<usize> {
        self.ring
            .capacity()
            .checked_mul(2)
            .ok_or(Error::CapacityOverflow)
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let capacity = match self.doubled() {
            Ok(capacity) => capacity,
            Err(_) => panic!("capacity overflow"),
        };
        self.ring.relocate(capacity);
        self.grown(capacity);
    }

    fn grown(&mut self, capacity: usize) {
        self.grow_count += 1;
        debug!(
            "growable queue grew to {} slots holding {} elements",
            capacity,
            self.ring.len()
        );
    }

    #[cold]
    #[inline(never)]
    fn shrink(&mut self, capacity: usize) {
        self.ring.relocate(capacity);
        self.shrink_count += 1;
        debug!(
            "growable queue shrank to {} slots holding {} elements",
            capacity,
            self.ring.len()
        );
    }
}

impl<R: Repr, W: Wrap, S: Shrink> Default for GrowableQueue<R, W, S> {
    fn default() -> Self {
        Self::new(util::DEFAULT_CAPACITY)
    }
}

impl<R: Repr, W: Wrap, S: Shrink> Queue for GrowableQueue<R, W, S> {
    type Output = R::Output;

    #[inline]
    fn enqueue(&mut self, value: i32) {
        GrowableQueue::enqueue(self, value)
    }

    #[inline]
    fn dequeue(&mut self) -> R::Output {
        GrowableQueue::dequeue(self)
    }

    #[inline]
    fn len(&self) -> usize {
        GrowableQueue::len(self)
    }
}

impl<R: Repr, W: Wrap, S: Shrink> core::fmt::Debug for GrowableQueue<R, W, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrowableQueue")
            .field("ring", &self.ring)
            .field("shrink", &S::NAME)
            .field("grow_count", &self.grow_count)
            .field("shrink_count", &self.shrink_count)
            .finish()
    }
}
