//! Thread-safe accumulation of many concurrently measured spans.

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{debug, trace};

use crate::pal::PlatformFacade;
use crate::{ERR_POISONED_LOCK, Error, Result, SpanGuard, SpanHandle, Stopwatch};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Process-unique, so handles from other accumulators never match ours.
fn next_generation() -> u64 {
    // Only uniqueness matters, the counter does not order any other memory access.
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug)]
struct Spans {
    stopwatches: Vec<Stopwatch>,
    generation: u64,
}

/// Sums the wall-clock time of spans opened and closed from any number of threads.
///
/// Every [`open_span()`][Self::open_span] starts a dedicated [`Stopwatch`] and returns a
/// [`SpanHandle`] that identifies it. Passing the handle to [`close_span()`][Self::close_span]
/// stops that stopwatch. Spans may overlap freely, so four threads each measuring 100 ms at the
/// same time add up to 400 ms, not 100 ms.
///
/// The internal lock is only held for bookkeeping. The measured work between opening and
/// closing a span runs outside of it.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use lap_timer::SpanAccumulator;
///
/// let accumulator = SpanAccumulator::new();
///
/// thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| {
///             let span = accumulator.open_span();
///             std::hint::black_box((0..1000).sum::<u64>());
///             accumulator.close_span(span).unwrap();
///         });
///     }
/// });
///
/// assert_eq!(accumulator.span_count(), 4);
/// println!("{} ms in total", accumulator.total_elapsed_milliseconds());
/// ```
#[derive(Debug)]
pub struct SpanAccumulator {
    spans: Mutex<Spans>,
    platform: PlatformFacade,
}

impl SpanAccumulator {
    /// Creates an accumulator with no spans.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an accumulator with room for `capacity` spans before it needs to reallocate.
    ///
    /// Useful when the number of spans per run is known in advance, keeping reallocation out of
    /// the lock held by [`open_span()`][Self::open_span].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_platform(capacity, PlatformFacade::real())
    }

    pub(crate) fn with_platform(capacity: usize, platform: PlatformFacade) -> Self {
        Self {
            spans: Mutex::new(Spans {
                stopwatches: Vec::with_capacity(capacity),
                generation: next_generation(),
            }),
            platform,
        }
    }

    /// Starts measuring a new span and returns the handle that closes it.
    ///
    /// The start instant is taken while the internal lock is held, so the recorded interval
    /// includes no time spent waiting for other threads to finish their bookkeeping.
    pub fn open_span(&self) -> SpanHandle {
        let mut spans = self.spans.lock().expect(ERR_POISONED_LOCK);

        let index = spans.stopwatches.len();
        let generation = spans.generation;

        let mut stopwatch = Stopwatch::with_platform(self.platform.clone());
        stopwatch.start();
        spans.stopwatches.push(stopwatch);

        drop(spans);

        trace!(index, generation, "span opened");

        SpanHandle::new(index, generation)
    }

    /// Stops measuring the span identified by `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if the accumulator was reset after the handle was
    /// issued or if the handle was issued by a different accumulator. Nothing is recorded in
    /// that case.
    pub fn close_span(&self, handle: SpanHandle) -> Result<()> {
        let mut spans = self.spans.lock().expect(ERR_POISONED_LOCK);

        let current_generation = spans.generation;
        let stopwatch = spans
            .stopwatches
            .get_mut(handle.index())
            .filter(|_| handle.generation() == current_generation);

        let Some(stopwatch) = stopwatch else {
            return Err(Error::InvalidHandle {
                index: handle.index(),
            });
        };

        stopwatch.stop();

        drop(spans);

        trace!(
            index = handle.index(),
            generation = handle.generation(),
            "span closed"
        );

        Ok(())
    }

    /// Opens a span that is closed when the returned guard is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lap_timer::SpanAccumulator;
    ///
    /// let accumulator = SpanAccumulator::new();
    ///
    /// {
    ///     let _span = accumulator.measure();
    ///     std::hint::black_box((0..1000).sum::<u64>());
    /// } // The span is closed here.
    ///
    /// assert_eq!(accumulator.span_count(), 1);
    /// ```
    pub fn measure(&self) -> SpanGuard<'_> {
        SpanGuard::new(self)
    }

    /// Discards all spans, open or closed.
    ///
    /// Handles issued before the reset are rejected by [`close_span()`][Self::close_span]
    /// afterwards and the next opened span has index zero again.
    pub fn reset(&self) {
        let mut spans = self.spans.lock().expect(ERR_POISONED_LOCK);

        let discarded = spans.stopwatches.len();
        spans.stopwatches.clear();
        spans.generation = next_generation();

        drop(spans);

        debug!(discarded, "span accumulator reset");
    }

    /// The sum of the time measured by all closed spans since creation or the last reset.
    ///
    /// Spans that are still open contribute nothing.
    #[must_use]
    pub fn total_elapsed(&self) -> Duration {
        let spans = self.spans.lock().expect(ERR_POISONED_LOCK);

        spans
            .stopwatches
            .iter()
            .map(Stopwatch::elapsed)
            .try_fold(Duration::ZERO, Duration::checked_add)
            .expect("total span time overflows Duration - this indicates an unrealistic scenario")
    }

    /// The sum of the time measured by all closed spans, truncated to whole milliseconds.
    ///
    /// The truncation applies to the sum, so many sub-millisecond spans still add up.
    #[must_use]
    pub fn total_elapsed_milliseconds(&self) -> u128 {
        self.total_elapsed().as_millis()
    }

    /// The number of spans opened since creation or the last reset, including open ones.
    #[must_use]
    pub fn span_count(&self) -> usize {
        self.spans.lock().expect(ERR_POISONED_LOCK).stopwatches.len()
    }

    /// Whether no span has been opened since creation or the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span_count() == 0
    }
}

impl Default for SpanAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SpanAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Two separate lock acquisitions, so the pair is not guaranteed to be consistent
        // if other threads are opening spans at the same time.
        let total = self.total_elapsed();
        let count = self.span_count();

        write!(f, "{total:?} across {count} spans")
    }
}
