use async_trait::async_trait;

use super::message::NotificationMessage;
use super::provider::{NotificationProvider, NotificationResult};
use crate::error::AppResult;

/// Logs messages instead of posting them; backs `serve --dry-run`.
#[derive(Debug, Clone, Default)]
pub struct DryRunProvider;

#[async_trait]
impl NotificationProvider for DryRunProvider {
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let payload = serde_json::to_string(message).unwrap_or_default();
        tracing::info!(title = message.title().unwrap_or("-"), payload = %payload, "Dry run, message not sent");

        Ok(NotificationResult {
            success: true,
            status_code: None,
            response: None,
            duration_ms: 0,
        })
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}
