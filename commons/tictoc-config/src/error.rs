// Copyright © 2024 Stephan Kunz

//! `tictoc-config` errors

// region:		--- Error
/// `tictoc-config` error type.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// no configuration file with the given name in any search location
	#[error("could not find file: {0}")]
	NotFound(String),
	/// the configuration file exists but could not be read
	#[error("reading configuration failed with {0}")]
	Io(#[from] std::io::Error),
	/// the content is not a valid json5 configuration
	#[error("parsing configuration failed with {0}")]
	Parse(#[from] json5::Error),
}
// endregion:	--- Error
