// Copyright © 2024 Stephan Kunz

//! Label handling.
//!
//! A label is shown in front of the formatted duration and always ends with a colon.

// region:		--- modules
use crate::error::{Error, Result};
// endregion:	--- modules

// region:		--- functions
/// Normalize a label: strip trailing whitespace and make sure it ends with `:`.
///
/// ```
/// # use tictoc::normalize;
/// assert_eq!(normalize("Total time:    "), "Total time:");
/// assert_eq!(normalize("Total time"), "Total time:");
/// ```
#[must_use]
pub fn normalize(label: &str) -> String {
	let label = label.trim_end();
	if label.ends_with(':') {
		label.to_owned()
	} else {
		format!("{label}:")
	}
}

/// Check that a message fits on a single report line.
/// # Errors
/// Returns [`Error::InvalidArgument`] if the message contains a line break.
pub fn validate(message: &str) -> Result<()> {
	if message.contains(['\n', '\r']) {
		return Err(Error::InvalidArgument(format!(
			"message {message:?} contains a line break"
		)));
	}
	Ok(())
}
// endregion:	--- functions

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trailing_whitespace() {
		assert_eq!(normalize("Total time:    "), "Total time:");
		assert_eq!(normalize("Total time     "), "Total time:");
		assert_eq!(normalize("Total time\t"), "Total time:");
	}

	#[test]
	fn appends_colon() {
		assert_eq!(normalize("Total time"), "Total time:");
		assert_eq!(normalize("end"), "end:");
		assert_eq!(normalize(""), ":");
	}

	#[test]
	fn idempotent() {
		for label in ["Total time", "Total time:", "Elapsed time:  ", " x ", ""] {
			let once = normalize(label);
			assert_eq!(normalize(&once), once);
		}
		assert_eq!(normalize("Total time"), normalize("Total time:"));
	}

	#[test]
	fn leading_whitespace_kept() {
		assert_eq!(normalize("  step"), "  step:");
	}

	#[test]
	fn line_breaks_rejected() {
		assert!(validate("Elapsed time").is_ok());
		assert!(matches!(
			validate("two\nlines"),
			Err(Error::InvalidArgument(_))
		));
		assert!(validate("carriage\r").is_err());
	}
}
