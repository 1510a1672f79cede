// Copyright © 2024 Stephan Kunz
#![crate_type = "lib"]
#![crate_name = "tictoc"]
#![warn(missing_docs)]

//! A stopwatch modeled after MATLAB's `tic` and `toc`.
//!
//! ```
//! # use tictoc::prelude::*;
//! # fn main() -> Result<()> {
//! let mut tt = TicToc::new();
//! tt.tic(None);
//! // do some work
//! let seconds = tt.toc_value(false)?;
//! assert!(seconds >= 0.0);
//! # Ok(())
//! # }
//! ```

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// region:    --- modules
/// Builder for timers
pub mod builder;
/// Clock sources
pub mod clock;
/// Error handling
pub mod error;
/// Duration formatting
pub mod format;
/// Label normalization
pub mod message;
/// Public interface of tictoc.
/// Typically it is sufficient to include the prelude with
/// `use tictoc::prelude::*;`
pub mod prelude;
/// Scoped use
pub mod scope;
/// Report destinations
pub mod sink;
/// The timer
pub mod timer;

// flatten
pub use error::{Error, Result};
pub use format::{format_duration, format_std_duration};
pub use message::normalize;
pub use timer::TicToc;
pub use tictoc_config::Config;
// endregion: --- modules
