use crate::config::SlackConfig;
use crate::models::Commit;
use crate::services::notifications::{Block, NotificationMessage};

use super::classifier::ReleaseCommitData;
use super::formatter::format_message;

/// Static parts of every release announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementTemplate {
    pub changelog_url: String,
    pub image_url: String,
    pub image_alt_text: String,
}

impl AnnouncementTemplate {
    /// Build the three-block release message for a classified commit:
    /// header, changelog link, then the formatted notes with the image.
    pub fn render(&self, commit: &Commit, release: &ReleaseCommitData) -> NotificationMessage {
        NotificationMessage {
            blocks: vec![
                Block::header(format!("Release {} !", release.version)),
                Block::markdown(format!("<{}|Full changelog>", self.changelog_url)),
                Block::markdown_with_image(
                    format_message(&commit.message),
                    &self.image_url,
                    &self.image_alt_text,
                ),
            ],
        }
    }
}

impl From<&SlackConfig> for AnnouncementTemplate {
    fn from(config: &SlackConfig) -> Self {
        Self {
            changelog_url: config.changelog_url.clone(),
            image_url: config.image_url.clone(),
            image_alt_text: config.image_alt_text.clone(),
        }
    }
}
