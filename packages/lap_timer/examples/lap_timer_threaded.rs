//! Summing the time spent in one region of code across many worker threads.
//!
//! Each worker opens its own span around the measured code, so overlapping work on different
//! threads is added up rather than collapsed into one interval.
//!
//! Run with: `cargo run --example lap_timer_threaded`
#![allow(
    clippy::arithmetic_side_effects,
    reason = "this is example code that doesn't need production-level safety"
)]

use std::thread;
use std::time::Duration;

use lap_timer::SpanAccumulator;

const WORKERS: usize = 4;
const ITERATIONS_PER_WORKER: usize = 5;

fn main() {
    println!("=== Threaded Span Accumulation Example ===\n");

    let accumulator = SpanAccumulator::with_capacity(WORKERS * ITERATIONS_PER_WORKER);

    thread::scope(|s| {
        for worker in 0..WORKERS {
            let accumulator = &accumulator;

            s.spawn(move || {
                for _ in 0..ITERATIONS_PER_WORKER {
                    let span = accumulator.open_span();
                    thread::sleep(Duration::from_millis(10));
                    accumulator
                        .close_span(span)
                        .expect("no reset happens while the workers are running");
                }

                println!("Worker {worker} finished");
            });
        }
    });

    println!("\nTotal: {accumulator}");
    println!(
        "Expected roughly {} ms of summed span time",
        WORKERS * ITERATIONS_PER_WORKER * 10
    );

    // The guard form closes the span at the end of the scope.
    accumulator.reset();
    {
        let _span = accumulator.measure();
        thread::sleep(Duration::from_millis(25));
    }
    println!("After reset and one guarded span: {accumulator}");
}
