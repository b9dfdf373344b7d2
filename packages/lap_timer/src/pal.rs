//! Platform abstraction layer for the monotonic clock.
//!
//! All time readings go through the [`Platform`] trait so that tests can substitute a fake
//! clock whose time only moves when told to.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
