//! Linked chain of fixed-size array segments
//!
//! ```text
//! head segment            tail segment
//! [ . . c d ] --next--> [ e f . . ]
//!       ^read  ^write       ^read ^write
//! ```
//!
//! Elements are written into the tail segment until it fills, then a new
//! segment is linked after it. Reading drains the head segment front to back
//! and releases it once a successor exists.

use super::repr::Repr;
use super::Queue;
use crate::util;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::ptr::NonNull;
use log::trace;

struct Segment<S> {
    slots: Box<[S]>,
    read: usize,
    write: usize,
    next: Option<NonNull<Segment<S>>>,
}

impl<S> Segment<S> {
    fn allocate<R: Repr<Slot = S>>(capacity: usize) -> NonNull<Self> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, R::vacant);
        let segment = Box::new(Segment {
            slots: slots.into_boxed_slice(),
            read: 0,
            write: 0,
            next: None,
        });
        trace!("allocated queue segment of {} slots", capacity);
        NonNull::from(Box::leak(segment))
    }

    #[inline(always)]
    fn is_full(&self) -> bool {
        self.write == self.slots.len()
    }

    #[inline(always)]
    fn is_drained(&self) -> bool {
        self.read == self.write
    }
}

/// An unbounded FIFO that allocates storage a segment at a time
///
/// Sits between [`LinkedQueue`](super::LinkedQueue), which allocates per
/// element, and [`GrowableQueue`](super::GrowableQueue), which relocates its
/// whole store on growth. Segments are never relocated.
///
/// # Examples
///
/// ```rust
/// use seqqueue::queue::{Queue, SegmentedInline};
///
/// let mut queue = SegmentedInline::new(2);
/// for value in 0..5 {
///     queue.enqueue(value);
/// }
/// assert_eq!(queue.segment_count(), 3);
/// for expected in 0..5 {
///     assert_eq!(queue.dequeue(), expected);
/// }
/// assert_eq!(queue.segment_count(), 1);
/// ```
pub struct SegmentedQueue<R: Repr> {
    head: Option<NonNull<Segment<R::Slot>>>,
    tail: Option<NonNull<Segment<R::Slot>>>,
    segment_capacity: usize,
    segments: usize,
    len: usize,
    _owns: PhantomData<Box<Segment<R::Slot>>>,
}

impl<R: Repr> SegmentedQueue<R> {
    /// Create an empty queue whose segments hold `segment_capacity` elements
    ///
    /// A capacity of 0 is treated as 1. No segment is allocated until the first
    /// `enqueue`.
    pub fn new(segment_capacity: usize) -> Self {
        Self {
            head: None,
            tail: None,
            segment_capacity: segment_capacity.max(1),
            segments: 0,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Elements per segment
    #[inline]
    pub fn segment_capacity(&self) -> usize {
        self.segment_capacity
    }

    /// Segments currently allocated
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Append `value`, linking a new segment when the tail one is full
    #[inline]
    pub fn enqueue(&mut self, value: i32) {
        let mut tail = match self.tail {
            // SAFETY: `tail` is the last segment of the chain owned by this
            // queue; `&mut self` guarantees exclusive access.
            Some(tail) if unsafe { !tail.as_ref().is_full() } => tail,
            _ => self.link_segment(),
        };
        // SAFETY: as above.
        let tail = unsafe { tail.as_mut() };
        tail.slots[tail.write] = R::pack(value);
        tail.write += 1;
        self.len += 1;
    }

    /// Remove the oldest element, or return the empty marker
    #[inline]
    pub fn dequeue(&mut self) -> R::Output {
        let Some(mut head) = self.head else {
            return R::EMPTY;
        };
        // SAFETY: `head` is the first segment of the chain owned by this queue.
        if unsafe { head.as_ref().is_drained() } {
            // SAFETY: as above.
            match unsafe { head.as_ref().next } {
                Some(next) => {
                    self.release_head(head, next);
                    head = next;
                }
                None => return R::EMPTY,
            }
        }

        // SAFETY: `head` is owned by this queue and holds at least one
        // unread element.
        let segment = unsafe { head.as_mut() };
        let value = R::take(&mut segment.slots[segment.read]);
        segment.read += 1;
        if segment.is_drained() && segment.next.is_none() {
            segment.read = 0;
            segment.write = 0;
        }
        self.len -= 1;
        value
    }

    /// Number of live elements across all segments
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no element is live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cold]
    fn link_segment(&mut self) -> NonNull<Segment<R::Slot>> {
        let segment = Segment::<R::Slot>::allocate::<R>(self.segment_capacity);
        match self.tail {
            // SAFETY: `tail` is the last segment owned by this queue.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(segment) },
            None => self.head = Some(segment),
        }
        self.tail = Some(segment);
        self.segments += 1;
        segment
    }

    #[cold]
    fn release_head(
        &mut self,
        head: NonNull<Segment<R::Slot>>,
        next: NonNull<Segment<R::Slot>>,
    ) {
        self.head = Some(next);
        self.segments -= 1;
        // SAFETY: `head` is unlinked above and no other pointer refers to it;
        // `tail` cannot alias it because it has a successor.
        drop(unsafe { Box::from_raw(head.as_ptr()) });
        trace!("released drained queue segment");
    }
}

impl<R: Repr> Drop for SegmentedQueue<R> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(segment) = link {
            // SAFETY: every segment in the chain is owned by this queue and
            // visited once.
            let segment = unsafe { Box::from_raw(segment.as_ptr()) };
            link = segment.next;
        }
        self.tail = None;
    }
}

impl<R: Repr> Default for SegmentedQueue<R> {
    fn default() -> Self {
        Self::new(util::DEFAULT_CAPACITY)
    }
}

impl<R: Repr> Queue for SegmentedQueue<R> {
    type Output = R::Output;

    #[inline]
    fn enqueue(&mut self, value: i32) {
        SegmentedQueue::enqueue(self, value)
    }

    #[inline]
    fn dequeue(&mut self) -> R::Output {
        SegmentedQueue::dequeue(self)
    }

    #[inline]
    fn len(&self) -> usize {
        SegmentedQueue::len(self)
    }
}

impl<R: Repr> core::fmt::Debug for SegmentedQueue<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SegmentedQueue")
            .field("repr", &R::NAME)
            .field("segment_capacity", &self.segment_capacity)
            .field("segments", &self.segments)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: the queue exclusively owns its segments; sending it sends the values.
unsafe impl<R: Repr> Send for SegmentedQueue<R> where R::Slot: Send {}
