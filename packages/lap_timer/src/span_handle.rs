/// Identifies one span opened by [`SpanAccumulator::open_span()`][crate::SpanAccumulator::open_span].
///
/// The handle is consumed by [`close_span()`][crate::SpanAccumulator::close_span], so each span
/// can be closed at most once. A handle is only meaningful to the accumulator that issued it
/// and only until that accumulator is reset.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a span stays open until its handle is passed to close_span()"]
pub struct SpanHandle {
    index: usize,
    generation: u64,
}

impl SpanHandle {
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        Self { index, generation }
    }

    /// Position of the span among all spans opened since the accumulator was created or
    /// last reset, starting from zero.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}
