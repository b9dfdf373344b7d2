//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

const ERR_POISONED_FAKE: &str = "FakePlatform state lock should not be poisoned";

#[derive(Debug)]
struct FakePlatformState {
    origin: Instant,
    offset: Duration,
}

/// Fake clock that stands still until a test advances it.
///
/// Clones share the same underlying time, so a test can keep one clone and advance the clock
/// while stopwatches hold the others.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                origin: Instant::now(),
                offset: Duration::ZERO,
            })),
        }
    }

    /// Moves the clock forward by `delta`, affecting all clones.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut state = self.state.lock().expect(ERR_POISONED_FAKE);
        state.offset = state
            .offset
            .checked_add(delta)
            .expect("fake clock offset overflows Duration - tests never advance this far");
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Instant {
        let state = self.state.lock().expect(ERR_POISONED_FAKE);
        state
            .origin
            .checked_add(state.offset)
            .expect("fake clock offset exceeds the range of Instant - tests never advance this far")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn stands_still_until_advanced() {
        let platform = FakePlatform::new();

        assert_eq!(platform.now(), platform.now());
    }

    #[test]
    fn advances_cumulatively() {
        let platform = FakePlatform::new();
        let start = platform.now();

        platform.advance(Duration::from_millis(150));
        platform.advance(Duration::from_micros(250));

        assert_eq!(
            platform.now().duration_since(start),
            Duration::from_micros(150_250)
        );
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();
        let start = platform2.now();

        platform1.advance(Duration::from_millis(100));

        assert_eq!(
            platform2.now().duration_since(start),
            Duration::from_millis(100)
        );
    }
}
