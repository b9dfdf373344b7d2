use thiserror::Error;

/// Errors that can occur when closing spans of a [`SpanAccumulator`][crate::SpanAccumulator].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The handle does not refer to an open span of this accumulator.
    ///
    /// This happens when the accumulator was reset after the handle was issued or when the
    /// handle was issued by a different accumulator.
    #[error("span handle {index} is not valid for this accumulator")]
    InvalidHandle {
        /// The span index carried by the rejected handle.
        index: usize,
    },
}

/// A specialized `Result` type for span operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn invalid_handle_names_index() {
        let error = Error::InvalidHandle { index: 7 };

        assert_eq!(
            error.to_string(),
            "span handle 7 is not valid for this accumulator"
        );
    }
}
