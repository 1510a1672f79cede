// Copyright © 2024 Stephan Kunz

//! The configuration data.
//!
//! A timers configuration can be defined using json5 formated files.
//!
//! # Examples
//! ```rust,no_run
//! # use tictoc_config::Config;
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
//! // the built-in defaults: "Elapsed time:", no begin message, printing enabled
//! let config = Config::default();
//!
//! // use file named `filename.json5`
//! // returns an error if file does not exist or is no valid configuration file
//! let config = Config::from_file("filename.json5")?;
//!
//! // use file named `tictoc.json5`, falling back to the defaults
//! let config = Config::load();
//! # Ok(())
//! # }
//! ```
//!
//! The methods using files will search in following directories for the file (order first to last):
//!  - current working directory
//!  - `.config` directory below current working directory
//!  - `tictoc` below the home directory, the local config directory and the config directory
//!

// region:		--- modules
use crate::utils::{find_config_file, read_config_file};
use crate::Result;
use tracing::{debug, warn};
// endregion:	--- modules

// region:		--- constants
/// Label used when a stop call gets no explicit message
pub const DEFAULT_END_MESSAGE: &str = "Elapsed time:";
/// Name of the file searched by [`Config::load`]
pub const DEFAULT_FILENAME: &str = "tictoc.json5";
// endregion:	--- constants

// region:		--- Config
/// Manages the configuration of a timer
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	end_message: String,
	begin_message: Option<String>,
	print_time: bool,
}

impl Default for Config {
	/// Create a default configuration
	fn default() -> Self {
		Self {
			end_message: DEFAULT_END_MESSAGE.into(),
			begin_message: None,
			print_time: true,
		}
	}
}

impl Config {
	/// Create a configuration based on file named `tictoc.json5`.
	///
	/// If the file cannot be found or parsed, the default configuration is used.
	#[must_use]
	pub fn load() -> Self {
		Self::from_file(DEFAULT_FILENAME).unwrap_or_else(|error| {
			warn!("{}, using default tictoc configuration instead", error);
			Self::default()
		})
	}

	/// Create a configuration based on file with given filename.
	///
	/// Will search in the directories mentioned in [`Examples`](index.html#examples).
	///
	/// # Errors
	/// Returns an error, if file does not exist in any of the places, is not accessible
	/// or does not contain a valid configuration.
	pub fn from_file(filename: &str) -> Result<Self> {
		let path = find_config_file(filename)?;
		debug!("using file {:?}", &path);
		let content = read_config_file(&path)?;
		Self::from_json5(&content)
	}

	/// Create a configuration from a json5 formatted string.
	///
	/// # Errors
	/// Returns an error if the content is no valid configuration.
	pub fn from_json5(content: &str) -> Result<Self> {
		let cfg = json5::from_str(content)?;
		Ok(cfg)
	}

	/// The label used when stopping without an explicit message.
	#[must_use]
	pub fn end_message(&self) -> &str {
		&self.end_message
	}

	/// The message printed when scoped use begins.
	#[must_use]
	pub fn begin_message(&self) -> Option<&str> {
		self.begin_message.as_deref()
	}

	/// Whether stop calls print unless overridden per call.
	#[must_use]
	pub const fn print_time(&self) -> bool {
		self.print_time
	}
}
// endregion:	--- Config
