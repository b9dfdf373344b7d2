//! Drop-based spans.

use tracing::warn;

use crate::{SpanAccumulator, SpanHandle};

/// A span of an accumulator that closes itself when dropped.
///
/// Created by [`SpanAccumulator::measure()`].
///
/// If the accumulator is reset while the guard is alive, the span no longer exists when the
/// guard drops. The measurement is then discarded and a warning is logged.
#[derive(Debug)]
#[must_use = "Measurements are taken between creation and drop"]
pub struct SpanGuard<'a> {
    accumulator: &'a SpanAccumulator,
    index: usize,

    // Only `None` after drop has closed the span.
    handle: Option<SpanHandle>,
}

impl<'a> SpanGuard<'a> {
    pub(crate) fn new(accumulator: &'a SpanAccumulator) -> Self {
        let handle = accumulator.open_span();

        Self {
            accumulator,
            index: handle.index(),
            handle: Some(handle),
        }
    }

    /// Position of the span in its accumulator, same as [`SpanHandle::index()`].
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Drop for SpanGuard<'_> {
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        if let Err(error) = self.accumulator.close_span(handle) {
            warn!(
                %error,
                "span guard outlived a reset of its accumulator, measurement discarded"
            );
        }
    }
}
