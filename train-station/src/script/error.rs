//! Script error types.

use crate::domain::StationError;

/// Errors that stop a station script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// A line could not be parsed as a command
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A station operation was rejected while running with `stop_on_error`
    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: StationError,
    },

    /// Reading the script or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a snapshot failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
