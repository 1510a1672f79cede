// Copyright © 2024 Stephan Kunz

//! Helper functions for locating configuration files

// region:		--- modules
use crate::{Error, Result};
use dirs::{config_dir, config_local_dir, home_dir};
use std::{
	env,
	path::{Path, PathBuf},
};
use tracing::trace;
// endregion:	--- modules

// region:		--- utils
/// find a config file given by name
///
/// function will search in following directories for the file (order first to last):
///  - current working directory
///  - `.config` directory below current working directory
///  - `tictoc` directory below home directory
///  - local config directory (`Linux`: `$XDG_CONFIG_HOME/tictoc` or `$HOME/.config/tictoc` | `Windows`: `{FOLDERID_LocalAppData}/tictoc` | `MacOS`: `$HOME/Library/Application Support/tictoc`)
///  - config directory (`Linux`: `$XDG_CONFIG_HOME/tictoc` or `$HOME/.config/tictoc` | `Windows`: `{FOLDERID_RoamingAppData}/tictoc` | `MacOS`: `$HOME/Library/Application Support/tictoc`)
/// # Errors
/// Returns [`Error::NotFound`] if none of the locations contains the file.
pub fn find_config_file(filename: &str) -> Result<PathBuf> {
	// handle environment path current working directory `CWD`
	if let Ok(cwd) = env::current_dir() {
		let path = cwd.join(filename);
		if path.is_file() {
			return Ok(path);
		}

		let path = cwd.join(".config").join(filename);
		if path.is_file() {
			return Ok(path);
		}
		// tests run inside the crate directory, the fixtures live at workspace root
		#[cfg(test)]
		let path = cwd.join("../../.config").join(filename);
		if path.is_file() {
			return Ok(path);
		}
	};

	// handle typical config directories
	for path in [home_dir(), config_local_dir(), config_dir()]
		.into_iter()
		.flatten()
	{
		let file = path.join("tictoc").join(filename);
		trace!("looking for {:?}", &file);
		if file.is_file() {
			return Ok(file);
		}
	}

	Err(Error::NotFound(filename.into()))
}

/// read a config file given by path
/// # Errors
/// Returns [`Error::Io`] if the file is not accessible.
pub fn read_config_file(path: &Path) -> Result<String> {
	Ok(std::fs::read_to_string(path)?)
}
// endregion:	--- utils
