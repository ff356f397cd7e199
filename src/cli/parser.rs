//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::build;

/// Announces release commits from push webhooks on Slack
#[derive(Parser, Debug)]
#[command(name = "release-notifier")]
#[command(about = "Announces release commits from push webhooks on Slack")]
#[command(long_about = "
release-notifier receives push webhooks, detects release commits by their
title and posts the formatted release notes to a Slack incoming webhook.

EXAMPLES:
    # Start the server with default configuration
    release-notifier serve

    # Start server on custom host and port
    release-notifier serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    release-notifier --config /path/to/config.toml serve

    # Log announcements instead of posting them
    release-notifier serve --dry-run

    # Check configuration without starting server
    release-notifier serve --check

    # Preview the Slack message for a commit
    git log -1 --format=%B | release-notifier render --title \"chore(release): 1.4.0 [skip ci]\"

For more information about configuration options, see the documentation.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the layered
    /// `config/` directory. Environment overrides still apply on top.
    ///
    /// Example: --config /etc/release-notifier/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects the `{environment}.toml` overlay instead of `NOTIFIER_APP_ENV`.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   release-notifier serve                           # Start with defaults
    ///   release-notifier serve --host 0.0.0.0 --port 80  # Bind to all interfaces on port 80
    ///   release-notifier serve --check                   # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections from any interface.
        ///
        /// Default: 127.0.0.1
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Default: 3000
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Overrides both configuration file settings and global --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Log release announcements instead of posting them to Slack
        #[arg(long)]
        dry_run: bool,

        /// Validate configuration and exit
        ///
        /// Returns exit code 0 if the server could start, non-zero otherwise.
        #[arg(long)]
        check: bool,
    },
    /// Preview the Slack message for a commit without sending it
    ///
    /// Prints the release classification of the title and, for release
    /// commits, the JSON message that would be posted.
    ///
    /// Examples:
    ///   release-notifier render --title "release: v1.0.0" --message-file notes.md
    ///   git log -1 --format=%B | release-notifier render --title "release: v1.0.0"
    Render {
        /// Commit title to classify
        #[arg(short, long)]
        title: String,

        /// File holding the commit message; read from stdin when omitted
        #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_readable_file)]
        message_file: Option<PathBuf>,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Validate CLI arguments beyond what clap checks
    pub fn validate(&self) -> Result<(), String> {
        if let Some(Commands::Render { title, .. }) = &self.command
            && title.trim().is_empty()
        {
            return Err("--title cannot be empty".to_string());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
