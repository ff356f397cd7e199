//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{CommandOutcome, RenderCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::services::release::AnnouncementTemplate;

/// Execute a CLI command with the given settings
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
///
/// # Returns
/// `CommandOutcome::StartServer` for `serve` (also the default command);
/// server startup itself is left to the caller.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub fn execute_command(cli: &Cli, settings: &Settings) -> AppResult<CommandOutcome> {
    cli.validate().map_err(|reason| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason,
    })?;

    match &cli.command {
        Some(Commands::Serve { check, .. }) => {
            ServeCommandHandler::new(settings.clone()).execute(*check)
        }
        None => Ok(CommandOutcome::StartServer),
        Some(Commands::Render {
            title,
            message_file,
        }) => {
            let template = AnnouncementTemplate::from(&settings.slack);
            RenderCommandHandler::new(template).execute(title, message_file.as_deref())?;
            Ok(CommandOutcome::Completed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_command_starts_server() {
        let cli = Cli::try_parse_from(["release-notifier"]).unwrap();
        assert_eq!(
            execute_command(&cli, &Settings::default()).unwrap(),
            CommandOutcome::StartServer
        );
    }

    #[test]
    fn test_serve_check_with_incomplete_slack_config() {
        let cli = Cli::try_parse_from(["release-notifier", "serve", "--check"]).unwrap();
        assert!(execute_command(&cli, &Settings::default()).is_err());
    }

    #[test]
    fn test_render_from_file_completes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msg.md");
        std::fs::write(&path, "notes").unwrap();
        let cli = Cli::try_parse_from([
            "release-notifier",
            "render",
            "--title",
            "release: v1.0.0",
            "--message-file",
            path.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(
            execute_command(&cli, &Settings::default()).unwrap(),
            CommandOutcome::Completed
        );
    }

    #[test]
    fn test_invalid_cli_arguments() {
        let cli = Cli::try_parse_from(["release-notifier", "render", "--title", " "]).unwrap();
        let err = execute_command(&cli, &Settings::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "cli_arguments"));
    }
}
