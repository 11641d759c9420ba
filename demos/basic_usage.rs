//! Basic usage example for seqqueue
//!
//! Builds every strategy over both representations, runs the same values
//! through each, and prints how much memory the queue handle and one element
//! take in each layout.

use std::mem::size_of;

use seqqueue::queue::{
    Boxed, FixedBoxed, FixedInline, GrowableBoxed, GrowableInline, Inline, LinkedBoxed,
    LinkedInline, Queue, Repr, SegmentedBoxed, SegmentedInline, Strategy,
};
use seqqueue::util;

fn round_trip<R: Repr + 'static>(strategy: Strategy) -> Vec<R::Output> {
    let mut queue = strategy.build::<R>(util::DEFAULT_CAPACITY);
    for value in [10, 20, 30] {
        queue.enqueue(value);
    }
    (0..4).map(|_| queue.dequeue()).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("seqqueue Usage Example");
    println!("======================");

    println!("\n1. Same values through every layout:");
    for strategy in Strategy::ALL {
        println!(
            "   {:<10} inline {:?}  boxed {:?}",
            strategy,
            round_trip::<Inline>(strategy),
            round_trip::<Boxed>(strategy)
        );
    }

    println!("\n2. Handle sizes (bytes):");
    println!("   {:<22} {:>3}", "FixedInline", size_of::<FixedInline>());
    println!("   {:<22} {:>3}", "FixedBoxed", size_of::<FixedBoxed>());
    println!("   {:<22} {:>3}", "GrowableInline", size_of::<GrowableInline>());
    println!("   {:<22} {:>3}", "GrowableBoxed", size_of::<GrowableBoxed>());
    println!("   {:<22} {:>3}", "LinkedInline", size_of::<LinkedInline>());
    println!("   {:<22} {:>3}", "LinkedBoxed", size_of::<LinkedBoxed>());
    println!("   {:<22} {:>3}", "SegmentedInline", size_of::<SegmentedInline>());
    println!("   {:<22} {:>3}", "SegmentedBoxed", size_of::<SegmentedBoxed>());

    println!("\n3. Per-element footprint (bytes):");
    println!(
        "   inline slot {}, boxed slot {} + {} on the heap",
        size_of::<<Inline as Repr>::Slot>(),
        size_of::<<Boxed as Repr>::Slot>(),
        size_of::<i32>()
    );

    println!("\n4. Growth:");
    let mut queue = GrowableInline::new(1);
    for value in 0..100 {
        queue.enqueue(value);
    }
    println!(
        "   100 elements from capacity 1: capacity {}, {} doublings",
        queue.capacity(),
        queue.grow_count()
    );

    println!("\n5. Strategy by name:");
    let strategy: Strategy = "segmented".parse()?;
    let mut queue = strategy.build::<Boxed>(4);
    queue.enqueue(Inline::SENTINEL);
    println!(
        "   {} holds the inline sentinel as a payload: {:?}",
        strategy,
        queue.dequeue()
    );

    Ok(())
}
