// Copyright © 2024 Stephan Kunz

//! Module `builder` provides the [`TicTocBuilder`] to configure a [`TicToc`].

// region:		--- modules
use crate::{
	clock::MonotonicClock,
	error::Result,
	message::validate,
	sink::StdoutSink,
	timer::TicToc,
};
use tictoc_config::{Config, DEFAULT_END_MESSAGE};
// endregion:	--- modules

// region:		--- TicTocBuilder
/// A builder for a [`TicToc`]
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct TicTocBuilder<C, S> {
	clock: C,
	sink: S,
	end_message: String,
	begin_message: Option<String>,
	print_time: bool,
}

impl Default for TicTocBuilder<MonotonicClock, StdoutSink> {
	fn default() -> Self {
		Self::new()
	}
}

impl TicTocBuilder<MonotonicClock, StdoutSink> {
	/// Construct a `TicTocBuilder` in initial state
	#[must_use]
	pub fn new() -> Self {
		Self {
			clock: MonotonicClock::new(),
			sink: StdoutSink,
			end_message: DEFAULT_END_MESSAGE.into(),
			begin_message: None,
			print_time: true,
		}
	}
}

impl<C, S> TicTocBuilder<C, S> {
	/// Set the label used when stopping without an explicit message.
	#[must_use]
	pub fn end_message(mut self, message: &str) -> Self {
		self.end_message = message.into();
		self
	}

	/// Set the message emitted when scoped use begins.
	#[must_use]
	pub fn begin_message(mut self, message: &str) -> Self {
		self.begin_message.replace(message.into());
		self
	}

	/// Set whether stop calls report by default.
	#[must_use]
	pub const fn print_time(mut self, print_time: bool) -> Self {
		self.print_time = print_time;
		self
	}

	/// Take over all values of a [`Config`].
	#[must_use]
	pub fn config(self, config: &Config) -> Self {
		let Self { clock, sink, .. } = self;
		Self {
			clock,
			sink,
			end_message: config.end_message().into(),
			begin_message: config.begin_message().map(Into::into),
			print_time: config.print_time(),
		}
	}

	/// Set the clock source
	#[must_use]
	pub fn clock<C2>(self, clock: C2) -> TicTocBuilder<C2, S> {
		let Self {
			sink,
			end_message,
			begin_message,
			print_time,
			..
		} = self;
		TicTocBuilder {
			clock,
			sink,
			end_message,
			begin_message,
			print_time,
		}
	}

	/// Set the destination of the report lines
	#[must_use]
	pub fn sink<S2>(self, sink: S2) -> TicTocBuilder<C, S2> {
		let Self {
			clock,
			end_message,
			begin_message,
			print_time,
			..
		} = self;
		TicTocBuilder {
			clock,
			sink,
			end_message,
			begin_message,
			print_time,
		}
	}

	/// Build the [`TicToc`]
	/// # Errors
	/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if a message contains a line break.
	pub fn build(self) -> Result<TicToc<C, S>> {
		validate(&self.end_message)?;
		if let Some(message) = &self.begin_message {
			validate(message)?;
		}
		Ok(TicToc::from_parts(
			self.clock,
			self.sink,
			&self.end_message,
			self.begin_message,
			self.print_time,
		))
	}
}
// endregion:	--- TicTocBuilder
