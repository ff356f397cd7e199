//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{
    FileSettings, HttpClientConfig, LoggerSettings, ServerConfig, Settings, SlackConfig,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl SlackConfig {
    /// Validate the shape of the Slack settings
    ///
    /// URLs may be left empty here; `validate_for_delivery` is the check the
    /// server runs before accepting webhooks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_optional_url("slack.webhook_url", &self.webhook_url)?;
        check_optional_url("slack.changelog_url", &self.changelog_url)?;
        check_optional_url("slack.image_url", &self.image_url)?;

        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "slack.timeout_seconds",
                "Slack timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }

    /// Require everything needed to actually post release messages
    ///
    /// In dry-run mode nothing is posted, so the webhook URL may stay empty.
    pub fn validate_for_delivery(&self) -> Result<(), ConfigError> {
        self.validate()?;

        if !self.dry_run && self.webhook_url.trim().is_empty() {
            return Err(ConfigError::MissingDeliverySetting {
                key: "slack.webhook_url",
                env_var: "SLACK_WEBHOOK_URL",
            });
        }

        if self.changelog_url.trim().is_empty() {
            return Err(ConfigError::MissingDeliverySetting {
                key: "slack.changelog_url",
                env_var: "CHANGELOG_URL",
            });
        }

        Ok(())
    }
}

impl HttpClientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::validation(
                "http.user_agent",
                "User-Agent cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.slack.validate()?;
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

fn check_optional_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    let url = Url::parse(value).map_err(|e| ConfigError::ValidationError {
        field: field.to_string(),
        message: format!("Invalid URL '{}': {}", value, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            field: field.to_string(),
            message: format!("URL must use http or https, got '{}'", url.scheme()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deliverable_slack() -> SlackConfig {
        SlackConfig {
            webhook_url: "https://hooks.slack.com/services/T000/B000/XXXX".to_string(),
            changelog_url: "https://gitlab.example.com/app/-/blob/main/CHANGELOG.md".to_string(),
            ..Default::default()
        }
    }

    // ========================================================================
    // ServerConfig validation tests
    // ========================================================================

    #[test]
    fn test_server_config_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_server_config_invalid_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "server.port")
        );
    }

    #[test]
    fn test_server_config_invalid_request_timeout() {
        let config = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "server.request_timeout")
        );
    }

    // ========================================================================
    // SlackConfig validation tests
    // ========================================================================

    #[test]
    fn test_slack_config_empty_urls_pass_shape_validation() {
        assert!(SlackConfig::default().validate().is_ok());
    }

    #[test]
    fn test_slack_config_rejects_malformed_webhook() {
        let config = SlackConfig {
            webhook_url: "hooks.slack.com/services/x".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "slack.webhook_url")
        );
    }

    #[test]
    fn test_slack_config_rejects_non_http_scheme() {
        let config = SlackConfig {
            changelog_url: "ftp://example.com/CHANGELOG.md".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "slack.changelog_url")
        );
    }

    #[test]
    fn test_slack_config_zero_timeout() {
        let config = SlackConfig {
            timeout_seconds: 0,
            ..deliverable_slack()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delivery_requires_webhook_url() {
        let config = SlackConfig {
            webhook_url: String::new(),
            ..deliverable_slack()
        };
        let err = config.validate_for_delivery().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingDeliverySetting { key: "slack.webhook_url", .. }
        ));
        assert!(err.to_string().contains("SLACK_WEBHOOK_URL"));
    }

    #[test]
    fn test_dry_run_does_not_need_webhook_url() {
        let config = SlackConfig {
            webhook_url: String::new(),
            dry_run: true,
            ..deliverable_slack()
        };
        assert!(config.validate_for_delivery().is_ok());
    }

    #[test]
    fn test_delivery_requires_changelog_url() {
        let config = SlackConfig {
            changelog_url: " ".to_string(),
            ..deliverable_slack()
        };
        let err = config.validate_for_delivery().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingDeliverySetting { env_var: "CHANGELOG_URL", .. }
        ));
    }

    #[test]
    fn test_delivery_valid() {
        assert!(deliverable_slack().validate_for_delivery().is_ok());
    }

    // ========================================================================
    // HttpClientConfig / LoggerSettings validation tests
    // ========================================================================

    #[test]
    fn test_http_client_zero_connect_timeout() {
        let config = HttpClientConfig {
            connect_timeout: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { field, .. } if field == "logger.level")
        );
    }

    #[test]
    fn test_logger_settings_file_enabled_without_path() {
        let mut settings = LoggerSettings::default();
        settings.file.enabled = true;
        settings.file.path = "".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_default_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }
}
