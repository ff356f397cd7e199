//! Core notification provider trait and types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::message::NotificationMessage;
use crate::error::AppResult;

/// Result of a send attempt that reached the remote endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Whether the endpoint accepted the message (2xx)
    pub success: bool,
    /// HTTP status code returned by the endpoint
    pub status_code: Option<u16>,
    /// Response body, useful when the endpoint rejects the payload
    pub response: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

/// Trait for notification transports.
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// Implementations return `Err` when nothing came back from the endpoint
/// (connect failure, timeout) and `Ok` with `success: false` when it answered
/// with a non-success status.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Sends a notification message
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;
}
