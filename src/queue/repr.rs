//! Element representations
//!
//! The second axis every queue is parameterized over. [`Inline`] keeps the
//! `i32` payload directly in the backing store, [`Boxed`] puts each payload in
//! its own heap allocation and stores the pointer.

use alloc::boxed::Box;
use core::fmt::Debug;

/// How a queue stores and returns its `i32` payloads
pub trait Repr {
    /// Stored form of one element
    type Slot;

    /// What `dequeue` hands back, including the empty marker
    type Output: Copy + PartialEq + Debug;

    /// Returned by `dequeue` on an empty queue
    const EMPTY: Self::Output;

    /// Short name used in benchmark ids and `Debug` output
    const NAME: &'static str;

    /// Value an unused array slot is initialized with
    fn vacant() -> Self::Slot;

    /// Wrap a payload for storage
    fn pack(value: i32) -> Self::Slot;

    /// Read a slot in place, leaving it for the next write
    fn take(slot: &mut Self::Slot) -> Self::Output;

    /// Consume an owned slot
    fn unpack(slot: Self::Slot) -> Self::Output;

    /// Whether `output` is the empty marker
    fn is_empty_marker(output: &Self::Output) -> bool;
}

/// Payloads stored by value; the empty marker is [`Inline::SENTINEL`]
///
/// Callers must never enqueue the sentinel itself, it is indistinguishable
/// from an empty queue on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inline;

impl Inline {
    /// Reserved payload signalling an empty queue
    pub const SENTINEL: i32 = -1;
}

impl Repr for Inline {
    type Slot = i32;
    type Output = i32;

    const EMPTY: i32 = Inline::SENTINEL;
    const NAME: &'static str = "inline";

    #[inline(always)]
    fn vacant() -> i32 {
        0
    }

    #[inline(always)]
    fn pack(value: i32) -> i32 {
        value
    }

    #[inline(always)]
    fn take(slot: &mut i32) -> i32 {
        *slot
    }

    #[inline(always)]
    fn unpack(slot: i32) -> i32 {
        slot
    }

    #[inline(always)]
    fn is_empty_marker(output: &i32) -> bool {
        *output == Inline::SENTINEL
    }
}

/// Payloads stored behind one heap allocation each; the empty marker is `None`
///
/// Taking a value out of an array slot releases its box, so a slot read twice
/// (only possible after overflowing a fixed queue) yields `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boxed;

impl Repr for Boxed {
    type Slot = Option<Box<i32>>;
    type Output = Option<i32>;

    const EMPTY: Option<i32> = None;
    const NAME: &'static str = "boxed";

    #[inline(always)]
    fn vacant() -> Option<Box<i32>> {
        None
    }

    #[inline(always)]
    fn pack(value: i32) -> Option<Box<i32>> {
        Some(Box::new(value))
    }

    #[inline(always)]
    fn take(slot: &mut Option<Box<i32>>) -> Option<i32> {
        slot.take().map(|value| *value)
    }

    #[inline(always)]
    fn unpack(slot: Option<Box<i32>>) -> Option<i32> {
        slot.map(|value| *value)
    }

    #[inline(always)]
    fn is_empty_marker(output: &Option<i32>) -> bool {
        output.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_take_leaves_slot() {
        let mut slot = Inline::pack(7);
        assert_eq!(Inline::take(&mut slot), 7);
        assert_eq!(Inline::take(&mut slot), 7);
        assert!(Inline::is_empty_marker(&Inline::EMPTY));
        assert!(!Inline::is_empty_marker(&0));
    }

    #[test]
    fn test_boxed_take_releases_slot() {
        let mut slot = Boxed::pack(-1);
        assert_eq!(Boxed::take(&mut slot), Some(-1));
        assert!(slot.is_none());
        assert_eq!(Boxed::take(&mut slot), None);
        assert!(Boxed::is_empty_marker(&Boxed::EMPTY));
        assert!(!Boxed::is_empty_marker(&Some(Inline::SENTINEL)));
    }
}
