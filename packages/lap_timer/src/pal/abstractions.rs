//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides access to a monotonic clock.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Reads the current instant. Successive calls never go backward.
    fn now(&self) -> Instant;
}
