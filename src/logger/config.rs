//! Runtime logger configuration
//!
//! Disabled sinks are `None`, so a config with no outputs is representable
//! only as both fields empty, which `validate` rejects.

use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::logger::error::LoggerError;

/// Sinks and filter for the global subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// `EnvFilter` directive, a bare level or e.g. `release_notifier=debug,hyper=warn`
    pub filter: String,
    pub console: Option<ConsoleOutput>,
    pub file: Option<FileOutput>,
}

impl LoggerConfig {
    pub fn console_only(filter: impl Into<String>, colored: bool) -> Self {
        Self {
            filter: filter.into(),
            console: Some(ConsoleOutput { colored }),
            file: None,
        }
    }

    pub fn validate(&self) -> Result<(), LoggerError> {
        if self.console.is_none() && self.file.is_none() {
            return Err(LoggerError::NoOutputs);
        }

        if let Some(file) = &self.file
            && file.path.as_os_str().is_empty()
        {
            return Err(LoggerError::MissingPath);
        }

        self.env_filter().map(|_| ())
    }

    /// Parse `filter` into the subscriber filter
    pub fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        EnvFilter::try_new(&self.filter).map_err(|e| LoggerError::InvalidFilter {
            filter: self.filter.clone(),
            message: e.to_string(),
        })
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::console_only("info", true)
    }
}

/// Stdout sink; colors are also dropped when stdout is not a terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOutput {
    pub colored: bool,
}

/// Log file sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    pub path: PathBuf,
    /// Keep earlier runs' lines instead of truncating
    pub append: bool,
    pub format: LogFormat,
}

/// Line layout of the file sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    Full,
    Compact,
    #[default]
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggerError::UnknownFormat(s.to_string())),
        }
    }
}
