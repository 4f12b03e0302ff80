//! Line-oriented command scripts for driving a station.
//!
//! Scripts let a station be exercised from a file: each line is one
//! command, query results and dumps are written to an output sink, and
//! rejected operations are skipped the same way the station skips them.

mod command;
mod config;
mod error;
mod runner;

pub use command::{Command, InvalidCommand};
pub use config::{PLATFORMS_VAR, RunnerConfig, SHOW_AFTER_EACH_VAR, STOP_ON_ERROR_VAR};
pub use error::ScriptError;
pub use runner::{RunSummary, Runner};
