// Copyright © 2024 Stephan Kunz

//! Human readable durations like `1hrs 1mins 1secs`.

// region:		--- modules
use core::time::Duration;
// endregion:	--- modules

// region:		--- units
/// Unit table from the least to the most significant unit.
/// The last unit has no modulus, any number of hours is printed in full.
const UNITS: [(&str, Option<u64>); 3] = [("secs", Some(60)), ("mins", Some(60)), ("hrs", None)];
// endregion:	--- units

// region:		--- functions
/// Format a duration given in seconds.
///
/// Fractions of a second are truncated, negative values and `NaN` are shown as `0secs`.
/// Units above the highest nonzero one are omitted.
///
/// ```
/// # use tictoc::format_duration;
/// assert_eq!(format_duration(75.1), "1mins 15secs");
/// assert_eq!(format_duration(3661.0), "1hrs 1mins 1secs");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(seconds: f64) -> String {
	// saturating conversion: truncates toward zero, clamps negative and NaN to 0
	let mut remaining = seconds as u64;
	let mut parts = Vec::with_capacity(UNITS.len());
	for (label, modulus) in UNITS {
		let amount = modulus.map_or(remaining, |modulus| remaining % modulus);
		parts.push(format!("{amount}{label}"));
		remaining = modulus.map_or(0, |modulus| remaining / modulus);
		if remaining == 0 {
			break;
		}
	}
	parts.reverse();
	parts.join(" ")
}

/// Format a [`Duration`], see [`format_duration`].
#[must_use]
pub fn format_std_duration(duration: Duration) -> String {
	format_duration(duration.as_secs_f64())
}
// endregion:	--- functions
