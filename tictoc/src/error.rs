// Copyright © 2024 Stephan Kunz

//! The `tictoc` specific error enum `Error` together with a type alias for [`std::result::Result`] to write only `Result<T>`.
//!

// region:		--- types
/// Type alias for `std::result::Result` to ease up implementation
pub type Result<T> = core::result::Result<T, Error>;
// endregion:	--- types

// region:    --- Error
/// `tictoc` Error type
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// A stop operation was called before any `tic`
	#[error("timer not started")]
	NotStarted,
	/// An elapsed value was requested before any `toc`
	#[error("timer not stopped")]
	NotStopped,
	/// A label or message was rejected
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Writing a report line failed
	#[error("writing to sink failed with {0}")]
	Io(#[from] std::io::Error),
	/// Loading the configuration failed
	#[error(transparent)]
	Config(#[from] tictoc_config::Error),
}

impl Error {
	/// `true` for the errors caused by driving the timer in the wrong order
	#[must_use]
	pub const fn is_invalid_state(&self) -> bool {
		matches!(self, Self::NotStarted | Self::NotStopped)
	}
}
// endregion: --- Error
