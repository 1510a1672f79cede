// Copyright © 2024 Stephan Kunz

//! Configuration library for `tictoc` timers.
//!

// region:		--- modules
mod config;
mod error;
mod utils;

// flatten
pub use config::*;
pub use error::Error;
pub use utils::find_config_file;
// endregion:	--- modules

// region:		--- types
/// Type alias for `std::result::Result` to ease up implementation
pub type Result<T> = core::result::Result<T, Error>;
// endregion:	--- types
