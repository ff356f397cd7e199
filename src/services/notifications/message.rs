//! Slack block message payload.

use serde::{Deserialize, Serialize};

/// Block message accepted by Slack incoming webhooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: TextObject,
    },
    Section {
        text: TextObject,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Image { image_url: String, alt_text: String },
}

impl Block {
    /// Header block; Slack only renders plain text here
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: TextObject::PlainText { text: text.into() },
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::Mrkdwn { text: text.into() },
            accessory: None,
        }
    }

    pub fn markdown_with_image(text: impl Into<String>, image_url: &str, alt_text: &str) -> Self {
        Block::Section {
            text: TextObject::Mrkdwn { text: text.into() },
            accessory: Some(Accessory::Image {
                image_url: image_url.to_string(),
                alt_text: alt_text.to_string(),
            }),
        }
    }

    pub fn text(&self) -> &str {
        let text = match self {
            Block::Header { text } | Block::Section { text, .. } => text,
        };
        match text {
            TextObject::PlainText { text } | TextObject::Mrkdwn { text } => text,
        }
    }
}

impl NotificationMessage {
    /// Text of the header block, used as a log-friendly title
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Header { .. } => Some(block.text()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_without_accessory_omits_field() {
        let value = serde_json::to_value(Block::markdown("*hi*")).unwrap();
        assert_eq!(
            value,
            json!({ "type": "section", "text": { "type": "mrkdwn", "text": "*hi*" } })
        );
    }

    #[test]
    fn test_deserialize_slack_payload() {
        let message: NotificationMessage = serde_json::from_value(json!({
            "blocks": [
                { "type": "header", "text": { "type": "plain_text", "text": "Release 1.0.0 !" } },
                { "type": "section", "text": { "type": "mrkdwn", "text": "notes" } }
            ]
        }))
        .unwrap();

        assert_eq!(message.title(), Some("Release 1.0.0 !"));
        assert_eq!(message.blocks[1].text(), "notes");
    }

    #[test]
    fn test_title_missing_without_header() {
        let message = NotificationMessage {
            blocks: vec![Block::markdown("only a section")],
        };
        assert_eq!(message.title(), None);
    }
}
