//! Benchmarks to measure the compute overhead of `lap_timer` logic itself.
//!
//! Every measured span here is empty, so the results show only the cost of the
//! bookkeeping that surrounds the measured code.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lap_timer::{SpanAccumulator, Stopwatch};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_timer_overhead");

    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(());
        });
    });

    group.bench_function("stopwatch_cycle_empty", |b| {
        let mut stopwatch = Stopwatch::new();

        b.iter(|| {
            stopwatch.start();
            black_box(());
            stopwatch.stop();
        });
    });

    group.bench_function("span_open_close_empty", |b| {
        let accumulator = SpanAccumulator::new();

        b.iter(|| {
            let span = accumulator.open_span();
            black_box(());
            accumulator.close_span(span).unwrap();
        });
    });

    group.bench_function("span_guard_empty", |b| {
        let accumulator = SpanAccumulator::new();

        b.iter(|| {
            let _span = accumulator.measure();
            black_box(());
        });
    });

    group.bench_function("total_elapsed_1000_spans", |b| {
        let accumulator = SpanAccumulator::with_capacity(1000);
        for _ in 0..1000 {
            let span = accumulator.open_span();
            accumulator.close_span(span).unwrap();
        }

        b.iter(|| black_box(accumulator.total_elapsed()));
    });

    group.finish();
}
