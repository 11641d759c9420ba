//! Property-based tests for the queue strategies using proptest
//!
//! Every strategy is checked against `VecDeque` as a model, over both element
//! representations.

use crate::queue::{
    Boxed, FixedCapacityQueue, GrowableQueue, Inline, LinkedQueue, Mask, Modulo, QuarterShrink,
    Queue, Repr, SegmentedQueue, Strategy as QueueStrategy,
};
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
enum Op {
    Enqueue(i32),
    Dequeue,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        7 => (0..i32::MAX).prop_map(Op::Enqueue),
        3 => Just(Op::Dequeue),
    ]
}

fn queue_strategy() -> impl Strategy<Value = QueueStrategy> {
    prop::sample::select(QueueStrategy::ALL.to_vec())
}

/// Replay `ops` against `queue` and a `VecDeque`, comparing every dequeue
fn check_against_model<Q, R>(queue: &mut Q, ops: &[Op]) -> Result<(), TestCaseError>
where
    Q: Queue<Output = R::Output> + ?Sized,
    R: Repr,
{
    let mut model = VecDeque::new();
    for &op in ops {
        match op {
            Op::Enqueue(value) => {
                queue.enqueue(value);
                model.push_back(value);
            }
            Op::Dequeue => {
                let expected = match model.pop_front() {
                    Some(value) => R::unpack(R::pack(value)),
                    None => R::EMPTY,
                };
                prop_assert_eq!(queue.dequeue(), expected);
            }
        }
        prop_assert_eq!(queue.len(), model.len());
    }
    while let Some(value) = model.pop_front() {
        prop_assert_eq!(queue.dequeue(), R::unpack(R::pack(value)));
    }
    prop_assert!(R::is_empty_marker(&queue.dequeue()));
    prop_assert!(queue.is_empty());
    Ok(())
}

/// Property: FIFO order matches the model for every unbounded strategy
mod fifo_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_growable_matches_model(
            capacity in 0usize..8,
            ops in prop::collection::vec(op(), 0..300)
        ) {
            check_against_model::<_, Inline>(&mut GrowableQueue::<Inline>::new(capacity), &ops)?;
            check_against_model::<_, Boxed>(&mut GrowableQueue::<Boxed, Mask>::new(capacity), &ops)?;
        }

        #[test]
        fn test_quarter_shrink_matches_model(
            capacity in 0usize..8,
            ops in prop::collection::vec(op(), 0..600)
        ) {
            let mut queue: GrowableQueue<Inline, Modulo, QuarterShrink> = GrowableQueue::new(capacity);
            check_against_model::<_, Inline>(&mut queue, &ops)?;
        }

        #[test]
        fn test_linked_matches_model(ops in prop::collection::vec(op(), 0..300)) {
            check_against_model::<_, Inline>(&mut LinkedQueue::<Inline>::new(), &ops)?;
            check_against_model::<_, Boxed>(&mut LinkedQueue::<Boxed>::new(), &ops)?;
        }

        #[test]
        fn test_segmented_matches_model(
            segment_capacity in 0usize..6,
            ops in prop::collection::vec(op(), 0..300)
        ) {
            check_against_model::<_, Inline>(&mut SegmentedQueue::<Inline>::new(segment_capacity), &ops)?;
            check_against_model::<_, Boxed>(&mut SegmentedQueue::<Boxed>::new(segment_capacity), &ops)?;
        }

        #[test]
        fn test_built_strategy_matches_model(
            strategy in queue_strategy(),
            ops in prop::collection::vec(op(), 0..64)
        ) {
            // 64 operations never overflow a 64-slot fixed queue
            let mut inline = strategy.build::<Inline>(64);
            check_against_model::<_, Inline>(&mut inline, &ops)?;
            let mut boxed = strategy.build::<Boxed>(64);
            check_against_model::<_, Boxed>(&mut boxed, &ops)?;
        }
    }
}

/// Property: the fixed queue is a correct FIFO while it never overflows
mod fixed_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_fixed_within_capacity(
            capacity in 1usize..32,
            ops in prop::collection::vec(op(), 0..300)
        ) {
            let mut queue: FixedCapacityQueue<Inline, Mask> = FixedCapacityQueue::new(capacity);
            let bound = queue.capacity();
            let mut live = 0usize;
            let bounded: Vec<Op> = ops
                .into_iter()
                .filter(|op| match op {
                    Op::Enqueue(_) if live == bound => false,
                    Op::Enqueue(_) => { live += 1; true }
                    Op::Dequeue => { live = live.saturating_sub(1); true }
                })
                .collect();
            check_against_model::<_, Inline>(&mut queue, &bounded)?;
        }

        #[test]
        fn test_wraparound_preserves_order(
            exponent in 1u32..8,
            round in 0usize..4
        ) {
            let capacity = 1usize << exponent;
            let mut queue: FixedCapacityQueue<Boxed> = FixedCapacityQueue::new(capacity);
            let mut next = 0i32;
            let mut expected = VecDeque::new();

            // rotate head/tail away from zero first
            for _ in 0..round * capacity / 2 {
                queue.enqueue(next);
                prop_assert_eq!(queue.dequeue(), Some(next));
                next += 1;
            }
            for _ in 0..capacity {
                queue.enqueue(next);
                expected.push_back(next);
                next += 1;
            }
            for _ in 0..capacity / 2 {
                prop_assert_eq!(queue.dequeue(), expected.pop_front());
            }
            for _ in 0..capacity / 2 {
                queue.enqueue(next);
                expected.push_back(next);
                next += 1;
            }
            while let Some(value) = expected.pop_front() {
                prop_assert_eq!(queue.dequeue(), Some(value));
            }
            prop_assert_eq!(queue.dequeue(), None);
        }
    }
}

/// Property: capacity behavior of the growable queue
mod capacity_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_capacity_is_power_of_two(requested in 0usize..10_000) {
            let queue: GrowableQueue<Inline> = GrowableQueue::new(requested);
            prop_assert!(queue.capacity().is_power_of_two());
            prop_assert!(queue.capacity() >= requested.max(1));
            prop_assert!(queue.capacity() / 2 < requested.max(1));
        }

        #[test]
        fn test_growth_preserves_order_and_count(
            exponent in 0u32..6,
            extra in 1usize..4
        ) {
            let capacity = 1usize << exponent;
            let mut queue: GrowableQueue<Boxed> = GrowableQueue::new(capacity);
            let count = 2 * capacity + extra;
            for value in 0..count as i32 {
                queue.enqueue(value);
            }
            prop_assert!(queue.grow_count() >= 2);
            for expected in 0..count as i32 {
                prop_assert_eq!(queue.dequeue(), Some(expected));
            }
            prop_assert_eq!(queue.dequeue(), None);
        }

        #[test]
        fn test_capacity_never_decreases(ops in prop::collection::vec(op(), 0..400)) {
            let mut queue: GrowableQueue<Inline> = GrowableQueue::new(1);
            let mut capacity = queue.capacity();
            for op in ops {
                match op {
                    Op::Enqueue(value) => queue.enqueue(value),
                    Op::Dequeue => { queue.dequeue(); }
                }
                prop_assert!(queue.capacity() >= capacity);
                prop_assert!(queue.len() <= queue.capacity());
                capacity = queue.capacity();
            }
            while !queue.is_empty() {
                queue.dequeue();
            }
            prop_assert_eq!(queue.capacity(), capacity);
            prop_assert_eq!(queue.shrink_count(), 0);
        }
    }
}
