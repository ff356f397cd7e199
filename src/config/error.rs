//! Errors raised while loading or checking settings

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required TOML layer is absent
    #[error("Configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// Merged sources do not deserialize into `Settings`
    #[error("Settings do not match the expected shape: {0}")]
    Deserialize(String),

    #[error("Invalid value for {field}: {message}")]
    ValidationError { field: String, message: String },

    /// Present-but-empty Slack setting the server cannot announce without
    #[error("{key} is required to deliver release announcements; set {env_var} or [slack] in the config file")]
    MissingDeliverySetting {
        key: &'static str,
        env_var: &'static str,
    },

    #[error("{var} has unknown value '{value}' (expected development, test, staging or production)")]
    UnknownEnvironment { var: &'static str, value: String },

    /// Two location variables that select different loading modes
    #[error("{first} and {second} cannot both be set; use one directory or one file")]
    ConflictingSources {
        first: &'static str,
        second: &'static str,
    },

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Dotted settings key the error is about, when there is one
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::ValidationError { field, .. } => Some(field),
            ConfigError::MissingDeliverySetting { key, .. } => Some(key),
            ConfigError::UnknownEnvironment { var, .. } => Some(var),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_delivery_setting_names_env_var() {
        let err = ConfigError::MissingDeliverySetting {
            key: "slack.changelog_url",
            env_var: "CHANGELOG_URL",
        };
        assert_eq!(err.key(), Some("slack.changelog_url"));
        assert!(err.to_string().contains("CHANGELOG_URL"));
    }

    #[test]
    fn test_missing_file_shows_path() {
        let err = ConfigError::MissingFile(PathBuf::from("config/default.toml"));
        assert_eq!(
            err.to_string(),
            "Configuration file not found: config/default.toml"
        );
        assert_eq!(err.key(), None);
    }
}
