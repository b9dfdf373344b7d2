//! Single-region wall-clock measurement.

use std::fmt;
use std::time::{Duration, Instant};

use crate::pal::{Platform, PlatformFacade};

/// Accumulates wall-clock time across one or more start/stop cycles.
///
/// Each [`stop()`][Self::stop] adds the time since the most recent [`start()`][Self::start]
/// to the total. The total never includes an interval that is still open.
///
/// Pairing of `start()` and `stop()` is the caller's responsibility. No transition is
/// rejected:
///
/// * Calling `start()` twice restarts the open interval.
/// * Calling `stop()` without a preceding `start()` measures from the moment the stopwatch
///   was created.
/// * Calling `stop()` twice without a `start()` in between counts the same interval twice.
///
/// # Examples
///
/// ```
/// use lap_timer::Stopwatch;
///
/// let mut stopwatch = Stopwatch::new();
///
/// for _ in 0..3 {
///     stopwatch.start();
///     // Work being measured.
///     std::hint::black_box((0..1000).sum::<u64>());
///     stopwatch.stop();
///
///     // Work that is not measured.
/// }
///
/// println!("measured {} ms", stopwatch.elapsed_milliseconds());
/// ```
#[derive(Debug, Clone)]
pub struct Stopwatch {
    platform: PlatformFacade,
    start_instant: Instant,
    accumulated: Duration,
    running: bool,
}

impl Stopwatch {
    /// Creates a stopwatch with zero accumulated time.
    ///
    /// The start instant is initialized to the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        let start_instant = platform.now();

        Self {
            platform,
            start_instant,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    /// Begins a new interval, discarding any interval that is already open.
    pub fn start(&mut self) {
        self.start_instant = self.platform.now();
        self.running = true;
    }

    /// Ends the current interval and adds its length to the accumulated time.
    pub fn stop(&mut self) {
        let interval = self
            .platform
            .now()
            .saturating_duration_since(self.start_instant);

        self.accumulated = self.accumulated.checked_add(interval).expect(
            "accumulated wall-clock time overflows Duration - this indicates an unrealistic scenario",
        );
        self.running = false;
    }

    /// Sets the accumulated time back to zero.
    ///
    /// An open interval stays open: a later `stop()` still adds the time since the last
    /// `start()`.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// The total time of all completed intervals since creation or the last reset.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.accumulated
    }

    /// The total time of all completed intervals, truncated to whole milliseconds.
    #[must_use]
    pub fn elapsed_milliseconds(&self) -> u128 {
        self.accumulated.as_millis()
    }

    /// Whether an interval has been started and not yet stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.accumulated)
    }
}
