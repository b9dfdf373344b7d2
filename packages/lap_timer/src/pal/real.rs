//! Real platform implementation backed by the operating system monotonic clock.

use std::time::Instant;

use crate::pal::abstractions::Platform;

#[derive(Debug, Clone)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    #[cfg_attr(test, mutants::skip)] // Real clock readings cannot be asserted exactly.
    fn now(&self) -> Instant {
        Instant::now()
    }
}
