use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type that represents all possible errors in the system.
///
/// Variants carry enough structure for the HTTP layer to pick a status code
/// and for logs to name the failing component.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Notification provider could not deliver a message
    #[error("Delivery via {provider} failed: {message}")]
    Delivery {
        provider: &'static str,
        message: String,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Build a delivery error for a provider
    pub fn delivery(provider: &'static str, message: impl Into<String>) -> Self {
        AppError::Delivery {
            provider,
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::MissingFile(_) => "config_file".to_string(),
            other => other.key().unwrap_or("configuration").to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
