//! Wall-clock time measurement for benchmarks, in a single region or summed across threads.
//!
//! This package provides two measurement tools:
//! - [`Stopwatch`] - Accumulates wall-clock time over start/stop cycles driven by one caller
//! - [`SpanAccumulator`] - Sums the wall-clock time of spans opened and closed concurrently
//!   from any number of threads, each span identified by a [`SpanHandle`]
//!
//! All times come from a monotonic clock and are reported either as a [`Duration`] or as whole
//! milliseconds, truncated rather than rounded.
//!
//! This package is not meant for use in production, serving only as a development tool.
//!
//! # Single region
//!
//! ```
//! use lap_timer::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::new();
//!
//! stopwatch.start();
//! std::hint::black_box((0..10_000).sum::<u64>());
//! stopwatch.stop();
//!
//! println!("{} ms", stopwatch.elapsed_milliseconds());
//! ```
//!
//! # Many threads, one region
//!
//! The accumulator is created by the caller and shared by reference with the worker threads.
//! Each worker opens a span before the measured code and closes it with the returned handle
//! afterwards. Spans from different threads may overlap and are measured independently.
//!
//! ```
//! use std::thread;
//!
//! use lap_timer::SpanAccumulator;
//!
//! let accumulator = SpanAccumulator::new();
//!
//! thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| {
//!             let span = accumulator.open_span();
//!             std::hint::black_box((0..10_000).sum::<u64>());
//!             accumulator
//!                 .close_span(span)
//!                 .expect("no reset happens while the workers are running");
//!         });
//!     }
//! });
//!
//! println!("{accumulator}");
//!
//! // Start over for the next benchmark run.
//! accumulator.reset();
//! assert_eq!(accumulator.open_span().index(), 0);
//! ```
//!
//! # Logging
//!
//! Span bookkeeping emits [`tracing`] events: `trace` when a span opens or closes, `debug` on
//! reset and `warn` when a [`SpanGuard`] could not close its span. No subscriber is installed
//! by this package.
//!
//! [`Duration`]: std::time::Duration

mod accumulator;
mod error;
mod pal;
mod span_guard;
mod span_handle;
mod stopwatch;

pub use accumulator::SpanAccumulator;
pub use error::{Error, Result};
pub use span_guard::SpanGuard;
pub use span_handle::SpanHandle;
pub use stopwatch::Stopwatch;

const ERR_POISONED_LOCK: &str = "encountered poisoned lock - program validity cannot be guaranteed";
