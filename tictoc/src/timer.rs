// Copyright © 2024 Stephan Kunz

//! Module `timer` provides the [`TicToc`] stopwatch.
//!
//! A [`TicToc`] is started with [`TicToc::tic`] and stopped with [`TicToc::toc`]
//! or one of its variants. Stopping computes the elapsed time, optionally reports
//! it to the [`Sink`] and optionally restarts the clock.

// region:		--- modules
use crate::{
	builder::TicTocBuilder,
	clock::{Clock, MonotonicClock},
	error::{Error, Result},
	format::format_duration,
	message::{normalize, validate},
	sink::{Sink, StdoutSink},
};
use core::fmt::Debug;
use tictoc_config::Config;
use tracing::{instrument, trace, Level};
// endregion:	--- modules

// region:		--- TicToc
/// A stopwatch modeled after MATLAB's `tic` and `toc`
pub struct TicToc<C = MonotonicClock, S = StdoutSink> {
	clock: C,
	sink: S,
	start: Option<f64>,
	end: Option<f64>,
	elapsed: Option<f64>,
	print_time: bool,
	begin_message: Option<String>,
	end_message: String,
	restart: Option<bool>,
}

impl<C, S> Debug for TicToc<C, S> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TicToc")
			.field("start", &self.start)
			.field("end", &self.end)
			.field("elapsed", &self.elapsed)
			.field("print_time", &self.print_time)
			.field("begin_message", &self.begin_message)
			.field("end_message", &self.end_message)
			.field("restart", &self.restart)
			.finish_non_exhaustive()
	}
}

impl Default for TicToc {
	fn default() -> Self {
		Self::new()
	}
}

impl TicToc {
	/// Constructor for a [`TicToc`] with default configuration,
	/// measuring with a [`MonotonicClock`] and reporting to standard output.
	#[must_use]
	pub fn new() -> Self {
		let config = Config::default();
		Self::from_parts(
			MonotonicClock::new(),
			StdoutSink,
			config.end_message(),
			None,
			config.print_time(),
		)
	}

	/// Create a [`TicTocBuilder`]
	#[must_use]
	pub fn builder() -> TicTocBuilder<MonotonicClock, StdoutSink> {
		TicTocBuilder::new()
	}

	/// Constructor for a [`TicToc`] using the given [`Config`]
	/// # Errors
	/// Returns [`Error::InvalidArgument`] if a configured message contains a line break.
	pub fn from_config(config: &Config) -> Result<Self> {
		Self::builder().config(config).build()
	}

	/// Constructor for a [`TicToc`] using the configuration file with given filename,
	/// see [`Config::from_file`] for the search locations.
	/// # Errors
	/// Returns [`Error::Config`] if the file is missing or invalid.
	pub fn from_file(filename: &str) -> Result<Self> {
		let config = Config::from_file(filename)?;
		Self::from_config(&config)
	}
}

impl<C, S> TicToc<C, S> {
	/// Assemble a timer from already validated parts
	pub(crate) fn from_parts(
		clock: C,
		sink: S,
		end_message: &str,
		begin_message: Option<String>,
		print_time: bool,
	) -> Self {
		Self {
			clock,
			sink,
			start: None,
			end: None,
			elapsed: None,
			print_time,
			begin_message,
			end_message: normalize(end_message),
			restart: None,
		}
	}

	/// Timestamp of the last start, `None` before the first [`TicToc::tic`]
	#[must_use]
	pub const fn start(&self) -> Option<f64> {
		self.start
	}

	/// Timestamp of the last stop, `None` before the first stop
	#[must_use]
	pub const fn end(&self) -> Option<f64> {
		self.end
	}

	/// Duration in seconds between the last start and the last stop
	#[must_use]
	pub const fn elapsed(&self) -> Option<f64> {
		self.elapsed
	}

	/// Whether stop calls report unless told otherwise
	#[must_use]
	pub const fn print_time(&self) -> bool {
		self.print_time
	}

	/// Message emitted when scoped use begins
	#[must_use]
	pub fn begin_message(&self) -> Option<&str> {
		self.begin_message.as_deref()
	}

	/// The normalized default label
	#[must_use]
	pub fn end_message(&self) -> &str {
		&self.end_message
	}

	/// The stored restart flag
	#[must_use]
	pub const fn restart(&self) -> Option<bool> {
		self.restart
	}

	/// Access the clock
	#[must_use]
	pub const fn clock(&self) -> &C {
		&self.clock
	}

	/// Access the sink
	#[must_use]
	pub const fn sink(&self) -> &S {
		&self.sink
	}

	/// Mutable access to the sink
	pub fn sink_mut(&mut self) -> &mut S {
		&mut self.sink
	}

	/// Consume the timer and return its sink
	pub fn into_sink(self) -> S {
		self.sink
	}

	/// Format the current elapsed time with the given label,
	/// or the end message if there is none. Does not stop the timer.
	/// # Errors
	/// Returns [`Error::NotStopped`] if the timer was never stopped
	/// and [`Error::InvalidArgument`] for a message with a line break.
	pub fn elapsed_string(&self, message: Option<&str>) -> Result<String> {
		if let Some(message) = message {
			validate(message)?;
		}
		let elapsed = self.elapsed.ok_or(Error::NotStopped)?;
		let label = normalize(self.label(message));
		Ok(format!("{label} {}", format_duration(elapsed)))
	}

	/// the explicit message unless it is empty
	fn label<'a>(&'a self, message: Option<&'a str>) -> &'a str {
		message
			.filter(|message| !message.is_empty())
			.unwrap_or(self.end_message.as_str())
	}
}

impl<C, S> TicToc<C, S>
where
	C: Clock,
	S: Sink,
{
	/// Start the timer.
	///
	/// A `restart` of `Some(true)` makes every following stop restart the timer.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn tic(&mut self, restart: Option<bool>) {
		if restart == Some(true) {
			self.restart = Some(true);
		}
		let now = self.clock.now();
		trace!(start = now, "tic");
		self.start = Some(now);
	}

	/// Stop the timer.
	///
	/// - `message` overrides the end message as label of the report.
	/// - `restart` decides for this call whether the timer restarts,
	///   `Some(true)` is also stored for all following stops.
	///   Without it, the stored flag decides. An explicit `Some(false)` skips the
	///   restart even when a previous call stored `Some(true)`, the stored flag is kept.
	/// - `print_time` decides for this call whether the report is emitted,
	///   without it the configured default decides.
	///
	/// A restart takes a fresh timestamp after reporting.
	/// # Errors
	/// Returns [`Error::NotStarted`] if [`TicToc::tic`] was never called,
	/// [`Error::InvalidArgument`] for a message with a line break
	/// and any error of the [`Sink`].
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn toc(
		&mut self,
		message: Option<&str>,
		restart: Option<bool>,
		print_time: Option<bool>,
	) -> Result<()> {
		if let Some(message) = message {
			validate(message)?;
		}
		let start = self.start.ok_or(Error::NotStarted)?;

		let end = self.clock.now();
		self.end = Some(end);
		self.elapsed = Some(end - start);
		trace!(end, elapsed = end - start, "toc");

		let reported = if print_time.unwrap_or(self.print_time) {
			self.elapsed_string(message)
				.and_then(|line| self.sink.emit(&line))
		} else {
			Ok(())
		};

		if restart == Some(true) {
			self.restart = Some(true);
		}
		if restart.or(self.restart).unwrap_or(false) {
			let now = self.clock.now();
			trace!(start = now, "restart");
			self.start = Some(now);
		}
		reported
	}

	/// Stop and restart the timer, same as [`TicToc::toc`] with `restart` set to `Some(true)`.
	/// # Errors
	/// See [`TicToc::toc`].
	pub fn rtoc(&mut self, message: Option<&str>, print_time: Option<bool>) -> Result<()> {
		self.toc(message, Some(true), print_time)
	}

	/// Stop the timer without reporting and return the elapsed seconds.
	///
	/// `restart` of `true` forces a restart, `false` leaves the decision to the stored flag.
	/// # Errors
	/// Returns [`Error::NotStarted`] if [`TicToc::tic`] was never called.
	pub fn toc_value(&mut self, restart: bool) -> Result<f64> {
		self.toc(None, restart.then_some(true), Some(false))?;
		self.elapsed.ok_or(Error::NotStopped)
	}

	/// Stop the timer without reporting and return the formatted duration without label.
	/// # Errors
	/// Returns [`Error::NotStarted`] if [`TicToc::tic`] was never called.
	pub fn toc_string(&mut self) -> Result<String> {
		self.toc(None, None, Some(false))?;
		self.elapsed
			.map(format_duration)
			.ok_or(Error::NotStopped)
	}
}
// endregion:	--- TicToc
