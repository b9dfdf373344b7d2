//! Platform facade for switching between real and fake implementations.

use std::time::Instant;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Either the real monotonic clock or, in tests, a manually advanced fake clock.
#[derive(Debug, Clone)]
pub(crate) enum PlatformFacade {
    Real(RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform)
    }

    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(platform) => platform.now(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now(),
        }
    }
}
