//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod render;
pub mod serve;

pub use render::RenderCommandHandler;
pub use serve::ServeCommandHandler;

/// What the caller should do once a command handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Run the HTTP server with the merged settings
    StartServer,
    /// The command finished; exit
    Completed,
}
