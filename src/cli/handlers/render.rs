//! Render command handler
//!
//! Offline preview of the Slack message a commit would produce.

use std::io::Read;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::Commit;
use crate::services::release::{AnnouncementTemplate, classify};

/// Handler for the render command
pub struct RenderCommandHandler {
    template: AnnouncementTemplate,
}

impl RenderCommandHandler {
    pub fn new(template: AnnouncementTemplate) -> Self {
        Self { template }
    }

    /// Print the preview for `title`, reading the message from `message_file`
    /// or from stdin.
    pub fn execute(&self, title: &str, message_file: Option<&Path>) -> AppResult<()> {
        let message = match message_file {
            Some(path) => std::fs::read_to_string(path).map_err(|e| AppError::Validation {
                field: "message_file".to_string(),
                reason: format!("Cannot read '{}': {}", path.display(), e),
            })?,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| AppError::Internal { source: e.into() })?;
                buffer
            }
        };

        println!("{}", self.preview(title, &message)?);
        Ok(())
    }

    /// Classification summary followed by the pretty-printed message JSON
    pub fn preview(&self, title: &str, message: &str) -> AppResult<String> {
        let release = classify(title);
        let mut output = format!(
            "release: {}\nversion: {}\n",
            release.is_release,
            if release.version.is_empty() {
                "-"
            } else {
                release.version.as_str()
            }
        );

        if !release.is_release {
            output.push_str("Not a release commit, nothing would be sent");
            return Ok(output);
        }

        let commit = Commit::new(title, message);
        let rendered = self.template.render(&commit, &release);
        let json = serde_json::to_string_pretty(&rendered).map_err(anyhow::Error::from)?;
        output.push_str(&json);

        Ok(output)
    }
}
