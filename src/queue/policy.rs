//! Type-level knobs for the array-backed queues
//!
//! [`Wrap`] picks how a ring index advances past the end of the store,
//! [`Shrink`] picks whether a growable queue ever gives capacity back.

/// Index advance rule for a ring of power-of-two `capacity`
///
/// All implementations agree for power-of-two capacities; they exist so the
/// cost of each form can be measured on its own.
pub trait Wrap {
    /// Short name used in benchmark ids and `Debug` output
    const NAME: &'static str;

    /// The index following `index`
    fn next(index: usize, capacity: usize) -> usize;
}

/// Increment, compare against the capacity, reset to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compare;

impl Wrap for Compare {
    const NAME: &'static str = "compare";

    #[inline(always)]
    fn next(index: usize, capacity: usize) -> usize {
        let next = index + 1;
        if next == capacity {
            0
        } else {
            next
        }
    }
}

/// Increment and mask with `capacity - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mask;

impl Wrap for Mask {
    const NAME: &'static str = "mask";

    #[inline(always)]
    fn next(index: usize, capacity: usize) -> usize {
        (index + 1) & (capacity - 1)
    }
}

/// Increment and take the remainder by `capacity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modulo;

impl Wrap for Modulo {
    const NAME: &'static str = "modulo";

    #[inline(always)]
    fn next(index: usize, capacity: usize) -> usize {
        (index + 1) % capacity
    }
}

/// Whether a growable queue releases capacity after a dequeue
pub trait Shrink {
    /// Short name used in benchmark ids and `Debug` output
    const NAME: &'static str;

    /// Capacity to relocate into once a dequeue leaves `len` live elements in a
    /// store of `capacity`, or `None` to keep the current store
    fn shrink_to(len: usize, capacity: usize) -> Option<usize>;
}

/// Capacity never decreases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeverShrink;

impl Shrink for NeverShrink {
    const NAME: &'static str = "never-shrink";

    #[inline(always)]
    fn shrink_to(_len: usize, _capacity: usize) -> Option<usize> {
        None
    }
}

/// Halve the store when it drops to a quarter full
///
/// Only kicks in above [`QuarterShrink::FLOOR`] live elements, so small queues
/// keep their store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuarterShrink;

impl QuarterShrink {
    /// Live element count at or below which no shrink happens
    pub const FLOOR: usize = 16;
}

impl Shrink for QuarterShrink {
    const NAME: &'static str = "quarter-shrink";

    #[inline]
    fn shrink_to(len: usize, capacity: usize) -> Option<usize> {
        if len > Self::FLOOR && len == capacity / 4 {
            Some(capacity / 2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<W: Wrap>(capacity: usize, steps: usize) -> Vec<usize> {
        let mut index = 0;
        let mut seen = Vec::with_capacity(steps);
        for _ in 0..steps {
            seen.push(index);
            index = W::next(index, capacity);
        }
        seen
    }

    #[test]
    fn test_wrap_strategies_agree() {
        for capacity in [1usize, 2, 4, 8, 64] {
            let compare = walk::<Compare>(capacity, capacity * 3);
            assert_eq!(compare, walk::<Mask>(capacity, capacity * 3));
            assert_eq!(compare, walk::<Modulo>(capacity, capacity * 3));
        }
    }

    #[test]
    fn test_wrap_resets_at_capacity() {
        assert_eq!(Compare::next(3, 4), 0);
        assert_eq!(Mask::next(3, 4), 0);
        assert_eq!(Modulo::next(3, 4), 0);
        assert_eq!(Compare::next(0, 1), 0);
    }

    #[test]
    fn test_quarter_shrink_thresholds() {
        assert_eq!(QuarterShrink::shrink_to(16, 64), None);
        assert_eq!(QuarterShrink::shrink_to(32, 128), Some(64));
        assert_eq!(QuarterShrink::shrink_to(33, 128), None);
        assert_eq!(NeverShrink::shrink_to(32, 128), None);
    }
}
