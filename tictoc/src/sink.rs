// Copyright © 2024 Stephan Kunz

//! Destinations for the report lines of a [`TicToc`](crate::TicToc).

// region:		--- modules
use crate::error::Result;
use std::io::Write;
// endregion:	--- modules

// region:		--- Sink
/// A line oriented text output
pub trait Sink {
	/// Emit one line, the sink terminates it with a newline
	/// # Errors
	/// Returns an error if the line could not be written.
	fn emit(&mut self, line: &str) -> Result<()>;
}

/// Collects the lines in memory
impl Sink for Vec<String> {
	fn emit(&mut self, line: &str) -> Result<()> {
		self.push(line.to_owned());
		Ok(())
	}
}
// endregion:	--- Sink

// region:		--- StdoutSink
/// The default [`Sink`], writes to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
	fn emit(&mut self, line: &str) -> Result<()> {
		let mut out = std::io::stdout().lock();
		writeln!(out, "{line}")?;
		Ok(())
	}
}
// endregion:	--- StdoutSink

// region:		--- WriterSink
/// A [`Sink`] on top of any [`Write`]
#[derive(Debug, Default)]
pub struct WriterSink<W: Write> {
	writer: W,
}

impl<W: Write> WriterSink<W> {
	/// Wrap a writer
	pub const fn new(writer: W) -> Self {
		Self { writer }
	}

	/// Access the wrapped writer
	pub const fn get_ref(&self) -> &W {
		&self.writer
	}

	/// Unwrap the writer
	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: Write> Sink for WriterSink<W> {
	fn emit(&mut self, line: &str) -> Result<()> {
		writeln!(self.writer, "{line}")?;
		self.writer.flush()?;
		Ok(())
	}
}
// endregion:	--- WriterSink
