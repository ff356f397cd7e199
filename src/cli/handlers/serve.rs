//! Serve command handler
//!
//! Handles the serve command including configuration checks and server startup.

use crate::config::Settings;
use crate::error::AppResult;

use super::CommandOutcome;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the serve command
    ///
    /// # Arguments
    /// * `check` - If true, validates configuration and exits without starting server
    ///
    /// # Returns
    /// `CommandOutcome::StartServer` when the caller should run the server
    ///
    /// # Errors
    /// - Configuration validation errors
    pub fn execute(&self, check: bool) -> AppResult<CommandOutcome> {
        if check {
            self.validate_only()?;
            Ok(CommandOutcome::Completed)
        } else {
            Ok(CommandOutcome::StartServer)
        }
    }

    /// Validate configuration without starting the server
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;
        self.config.slack.validate_for_delivery()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        if self.config.slack.dry_run {
            println!("✓ Dry run: announcements are logged, not posted");
        } else {
            println!("✓ Slack webhook URL is configured");
        }
        println!("✓ Changelog link: {}", self.config.slack.changelog_url);
        println!("✓ Logger configuration is valid");
        println!("Check completed successfully - configuration is ready for deployment");

        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.slack.webhook_url = "https://hooks.slack.com/services/T000/B000/XXXX".to_string();
        config.slack.changelog_url = "https://example.com/CHANGELOG.md".to_string();
        config
    }

    #[test]
    fn test_serve_handler_new() {
        let config = create_valid_config();
        let handler = ServeCommandHandler::new(config.clone());
        assert_eq!(handler.config(), &config);
    }

    #[test]
    fn test_serve_starts_server_without_check() {
        let handler = ServeCommandHandler::new(Settings::default());
        assert_eq!(handler.execute(false).unwrap(), CommandOutcome::StartServer);
    }

    #[test]
    fn test_check_valid_config() {
        let handler = ServeCommandHandler::new(create_valid_config());
        assert_eq!(handler.execute(true).unwrap(), CommandOutcome::Completed);
    }

    #[test]
    fn test_check_invalid_port() {
        let mut config = create_valid_config();
        config.server.port = 0;
        let handler = ServeCommandHandler::new(config);

        assert!(handler.execute(true).is_err());
    }

    #[test]
    fn test_check_missing_webhook_url() {
        let mut config = create_valid_config();
        config.slack.webhook_url.clear();
        let handler = ServeCommandHandler::new(config);

        let err = handler.execute(true).unwrap_err();
        assert!(
            matches!(err, AppError::Configuration { ref key, .. } if key == "slack.webhook_url")
        );
    }
}
