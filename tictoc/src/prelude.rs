// Copyright © 2024 Stephan Kunz

// region:    --- modules
pub use crate::builder::TicTocBuilder;
pub use crate::clock::{Clock, MonotonicClock};
pub use crate::error::{Error, Result};
pub use crate::format::format_duration;
pub use crate::scope::Scope;
pub use crate::sink::{Sink, StdoutSink, WriterSink};
pub use crate::timer::TicToc;
pub use tictoc_config::Config;
// endregion: --- modules
