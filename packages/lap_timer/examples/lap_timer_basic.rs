//! Basic usage of `Stopwatch` to time one region of code over several cycles.
//!
//! Run with: `cargo run --example lap_timer_basic`
#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that doesn't need production-level safety"
)]

use std::hint::black_box;

use lap_timer::Stopwatch;

fn main() {
    println!("=== Stopwatch Example ===\n");

    let mut stopwatch = Stopwatch::new();

    for round in 1..=5_u64 {
        // Setup work that should not be measured.
        let input: Vec<u64> = (0..round * 100_000).collect();

        stopwatch.start();
        let sum: u64 = input.iter().copied().map(black_box).sum();
        stopwatch.stop();

        println!("Round {round}: sum = {sum}, total so far = {stopwatch}");
    }

    println!(
        "\nMeasured {} ms over 5 rounds",
        stopwatch.elapsed_milliseconds()
    );

    stopwatch.reset();
    println!("After reset: {} ms", stopwatch.elapsed_milliseconds());
}
