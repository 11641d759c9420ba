//! Node-per-element linked queue
//!
//! ```text
//! head                               tail
//!  |                                  |
//!  v                                  v
//! [a] --next--> [b] --next--> [c] --next--> None
//! ```
//!
//! The queue owns every node reachable from `head`. `tail` aliases the last
//! node of that chain and only exists to make `enqueue` O(1).

use super::repr::Repr;
use super::Queue;
use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

struct Node<S> {
    value: S,
    next: Option<NonNull<Node<S>>>,
}

type Link<S> = Option<NonNull<Node<S>>>;

/// An unbounded FIFO allocating one node per element
///
/// There is no capacity; every `enqueue` allocates and every successful
/// `dequeue` frees one node.
///
/// # Examples
///
/// ```rust
/// use seqqueue::queue::{LinkedBoxed, Queue};
///
/// let mut queue = LinkedBoxed::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct LinkedQueue<R: Repr> {
    head: Link<R::Slot>,
    tail: Link<R::Slot>,
    len: usize,
    _owns: PhantomData<Box<Node<R::Slot>>>,
}

impl<R: Repr> LinkedQueue<R> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Create an empty queue, ignoring the capacity hint
    ///
    /// Exists so every strategy can be built from the same arguments.
    pub fn with_capacity(_capacity: usize) -> Self {
        Self::new()
    }

    /// Append `value` in a freshly allocated node
    #[inline]
    pub fn enqueue(&mut self, value: i32) {
        let node = Box::new(Node {
            value: R::pack(value),
            next: None,
        });
        let node = NonNull::from(Box::leak(node));
        match self.tail {
            // SAFETY: `tail` points at the last node of the chain owned by this
            // queue, and `&mut self` rules out any other live reference to it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Detach the oldest node and return its value, or the empty marker
    #[inline]
    pub fn dequeue(&mut self) -> R::Output {
        match self.head {
            Some(head) => {
                // SAFETY: `head` came from `Box::leak` in `enqueue` and is
                // unlinked below, so ownership is reclaimed exactly once.
                let node = unsafe { Box::from_raw(head.as_ptr()) };
                self.head = node.next;
                if self.head.is_none() {
                    self.tail = None;
                }
                self.len -= 1;
                R::unpack(node.value)
            }
            None => R::EMPTY,
        }
    }

    /// Number of nodes in the chain
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<R: Repr> Drop for LinkedQueue<R> {
    fn drop(&mut self) {
        // Iterative so long chains cannot exhaust the stack.
        let mut link = self.head.take();
        while let Some(node) = link {
            // SAFETY: every node in the chain is owned by this queue and
            // visited once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            link = node.next;
        }
        self.tail = None;
    }
}

impl<R: Repr> Default for LinkedQueue<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Repr> Queue for LinkedQueue<R> {
    type Output = R::Output;

    #[inline]
    fn enqueue(&mut self, value: i32) {
        LinkedQueue::enqueue(self, value)
    }

    #[inline]
    fn dequeue(&mut self) -> R::Output {
        LinkedQueue::dequeue(self)
    }

    #[inline]
    fn len(&self) -> usize {
        LinkedQueue::len(self)
    }
}

impl<R: Repr> core::fmt::Debug for LinkedQueue<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinkedQueue")
            .field("repr", &R::NAME)
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: the queue exclusively owns its nodes; sending it sends the values.
unsafe impl<R: Repr> Send for LinkedQueue<R> where R::Slot: Send {}
