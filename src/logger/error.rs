//! Error types for the logger

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up log outputs
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Cannot open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No log output enabled; enable the console or the file sink")]
    NoOutputs,

    #[error("File logging is enabled but no path is set")]
    MissingPath,

    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("Unknown log format '{0}', expected full, compact or json")]
    UnknownFormat(String),

    #[error("A global logger is already installed: {message}")]
    AlreadyInitialized { message: String },
}
