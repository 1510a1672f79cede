// Copyright © 2024 Stephan Kunz

//! Scoped use of a [`TicToc`].
//!
//! Entering a scope emits the begin message and starts the timer.
//! Leaving it stops the timer and reports with the end message,
//! also when the timed work fails or panics.

// region:		--- modules
use crate::{clock::Clock, error::Result, sink::Sink, timer::TicToc};
use tracing::{instrument, warn, Level};
// endregion:	--- modules

// region:		--- Scope
/// Guard returned by [`TicToc::scope`], reports the elapsed time exactly once
#[must_use = "the elapsed time is reported when the scope is dropped"]
pub struct Scope<'a, C, S>
where
	C: Clock,
	S: Sink,
{
	timer: &'a mut TicToc<C, S>,
	finished: bool,
}

impl<C, S> Scope<'_, C, S>
where
	C: Clock,
	S: Sink,
{
	/// Leave the scope and report, surfacing errors of the [`Sink`].
	/// # Errors
	/// Returns any error of the [`Sink`].
	pub fn finish(mut self) -> Result<()> {
		self.finished = true;
		leave(self.timer)
	}
}

impl<C, S> Drop for Scope<'_, C, S>
where
	C: Clock,
	S: Sink,
{
	fn drop(&mut self) {
		if !self.finished {
			self.finished = true;
			if let Err(error) = leave(self.timer) {
				warn!("leaving timer scope failed with {error}");
			}
		}
	}
}

#[instrument(level = Level::TRACE, skip_all)]
fn leave<C, S>(timer: &mut TicToc<C, S>) -> Result<()>
where
	C: Clock,
	S: Sink,
{
	let label = timer.end_message().to_owned();
	timer.toc(Some(&label), Some(false), None)
}
// endregion:	--- Scope

// region:		--- TicToc
impl<C, S> TicToc<C, S>
where
	C: Clock,
	S: Sink,
{
	/// Enter scoped use: emit the begin message, if any, and start the timer.
	/// # Errors
	/// Returns any error of the [`Sink`], the timer is not started then.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn scope(&mut self) -> Result<Scope<'_, C, S>> {
		if let Some(message) = self
			.begin_message()
			.filter(|message| !message.is_empty())
			.map(ToOwned::to_owned)
		{
			self.sink_mut().emit(&message)?;
		}
		self.tic(None);
		Ok(Scope {
			timer: self,
			finished: false,
		})
	}

	/// Time the closure `f` in a scope and return its result unchanged.
	///
	/// Once `f` has run its value is always returned, a failing report
	/// on leaving the scope is only traced like in [`Scope`]s `Drop`.
	/// # Errors
	/// Returns any error of the [`Sink`] on entering the scope, `f` is not run then.
	pub fn time<T, F>(&mut self, f: F) -> Result<T>
	where
		F: FnOnce() -> T,
	{
		let scope = self.scope()?;
		let value = f();
		if let Err(error) = scope.finish() {
			warn!("leaving timer scope failed with {error}");
		}
		Ok(value)
	}
}
// endregion:	--- TicToc

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use std::{
		cell::Cell,
		panic::{catch_unwind, AssertUnwindSafe},
		rc::Rc,
	};

	fn clock(step: f64) -> impl Fn() -> f64 {
		let now = Rc::new(Cell::new(0.0));
		move || {
			let value = now.get();
			now.set(value + step);
			value
		}
	}

	#[test]
	fn reports_on_drop() -> Result<()> {
		let mut tt = TicToc::builder().clock(clock(1.1)).sink(Vec::new()).build()?;
		{
			let _scope = tt.scope()?;
		}
		assert_eq!(tt.sink(), &vec!["Elapsed time: 1secs".to_string()]);
		Ok(())
	}

	#[test]
	fn begin_and_end_message() -> Result<()> {
		let mut tt = TicToc::builder()
			.clock(clock(1.1))
			.sink(Vec::new())
			.end_message("end")
			.begin_message("start")
			.build()?;
		tt.scope()?.finish()?;
		assert_eq!(
			tt.sink(),
			&vec!["start".to_string(), "end: 1secs".to_string()]
		);
		Ok(())
	}

	#[test]
	fn finish_reports_once() -> Result<()> {
		let mut tt = TicToc::builder().clock(clock(1.0)).sink(Vec::new()).build()?;
		let scope = tt.scope()?;
		scope.finish()?;
		assert_eq!(tt.sink().len(), 1);
		Ok(())
	}

	#[test]
	fn body_error_passes_through() -> Result<()> {
		let mut tt = TicToc::builder().clock(clock(75.1)).sink(Vec::new()).build()?;
		let result: core::result::Result<(), &str> = tt.time(|| Err("boom"))?;
		assert_eq!(result, Err("boom"));
		assert_eq!(tt.sink(), &vec!["Elapsed time: 1mins 15secs".to_string()]);
		Ok(())
	}

	#[test]
	fn reports_when_body_panics() -> Result<()> {
		let mut tt = TicToc::builder().clock(clock(1.0)).sink(Vec::new()).build()?;
		let outcome = catch_unwind(AssertUnwindSafe(|| {
			let _ = tt.time(|| panic!("timed work failed"));
		}));
		assert!(outcome.is_err());
		assert_eq!(tt.sink(), &vec!["Elapsed time: 1secs".to_string()]);
		Ok(())
	}

	#[test]
	fn does_not_restart_on_exit() -> Result<()> {
		let mut tt = TicToc::builder().clock(clock(1.0)).sink(Vec::new()).build()?;
		tt.tic(Some(true));
		tt.time(|| ())?;
		assert_eq!(tt.start(), Some(1.0));
		assert_eq!(tt.restart(), Some(true));
		Ok(())
	}

	/// a sink that refuses every line
	struct Broken;

	impl Sink for Broken {
		fn emit(&mut self, _line: &str) -> Result<()> {
			Err(std::io::Error::other("closed").into())
		}
	}

	#[test]
	fn failing_sink_on_enter() -> Result<()> {
		let mut tt = TicToc::builder()
			.clock(clock(1.0))
			.sink(Broken)
			.begin_message("start")
			.build()?;
		assert!(matches!(tt.scope(), Err(Error::Io(_))));
		assert_eq!(tt.start(), None);
		Ok(())
	}

	#[test]
	fn failing_sink_on_leave_keeps_body_result() -> Result<()> {
		let mut tt = TicToc::builder().clock(clock(1.0)).sink(Broken).build()?;
		let ran = Cell::new(false);
		let result: core::result::Result<(), &str> = tt.time(|| {
			ran.set(true);
			Err("body failed")
		})?;
		assert!(ran.get());
		assert_eq!(result, Err("body failed"));
		assert_eq!(tt.elapsed(), Some(1.0));
		Ok(())
	}

	#[test]
	fn empty_begin_message_is_skipped() -> Result<()> {
		let mut tt = TicToc::builder()
			.clock(clock(1.0))
			.sink(Vec::new())
			.begin_message("")
			.build()?;
		tt.time(|| ())?;
		assert_eq!(tt.sink(), &vec!["Elapsed time: 1secs".to_string()]);
		Ok(())
	}
}
