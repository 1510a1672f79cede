// Copyright © 2024 Stephan Kunz

//! Clock sources for a [`TicToc`](crate::TicToc).
//!
//! A clock returns a nondecreasing timestamp in seconds as `f64`.
//! Any `Fn() -> f64` is a clock, which allows scripted clocks in tests.

// region:		--- modules
use std::time::Instant;
// endregion:	--- modules

// region:		--- Clock
/// A source of timestamps in seconds
pub trait Clock {
	/// The current timestamp
	fn now(&self) -> f64;
}

impl<F> Clock for F
where
	F: Fn() -> f64,
{
	fn now(&self) -> f64 {
		self()
	}
}
// endregion:	--- Clock

// region:		--- MonotonicClock
/// The default [`Clock`], seconds since its own creation based on [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
	origin: Instant,
}

impl Default for MonotonicClock {
	fn default() -> Self {
		Self::new()
	}
}

impl MonotonicClock {
	/// Create a clock with its origin at this moment
	#[must_use]
	pub fn new() -> Self {
		Self {
			origin: Instant::now(),
		}
	}
}

impl Clock for MonotonicClock {
	fn now(&self) -> f64 {
		self.origin.elapsed().as_secs_f64()
	}
}
// endregion:	--- MonotonicClock
