//! Slack incoming-webhook provider.

use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::message::NotificationMessage;
use super::provider::{NotificationProvider, NotificationResult};
use crate::config::SlackConfig;
use crate::error::{AppError, AppResult};

const PROVIDER_NAME: &str = "slack";

/// Posts block messages to a Slack incoming webhook.
///
/// The HTTP client is injected so connection pooling is shared with the rest
/// of the process and tests can point the provider at a local endpoint.
pub struct SlackProvider {
    client: reqwest::Client,
    webhook_url: String,
    timeout: Duration,
}

impl SlackProvider {
    pub fn new(client: reqwest::Client, webhook_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
            timeout,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &SlackConfig) -> Self {
        Self::new(
            client,
            config.webhook_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn describe_transport_error(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("no response within {}ms", self.timeout.as_millis())
        } else if error.is_connect() {
            format!("connection failed: {}", error)
        } else {
            error.to_string()
        }
    }
}

#[async_trait]
impl NotificationProvider for SlackProvider {
    /// Posts the message as JSON and waits for Slack's answer.
    ///
    /// The per-request timeout bounds the whole exchange, body included.
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.webhook_url)
            .timeout(self.timeout)
            .json(message)
            .send()
            .await
            .map_err(|e| AppError::delivery(PROVIDER_NAME, self.describe_transport_error(&e)))?;

        let status = response.status();
        let body = response.text().await.ok();

        Ok(NotificationResult {
            success: status.is_success(),
            status_code: Some(status.as_u16()),
            response: body,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
