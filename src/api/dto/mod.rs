//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `webhook` - Push webhook request/response DTOs
//! - `health` - Health check DTOs
//! - `error` - Common error response DTOs

mod error;
mod health;
mod webhook;

pub use error::ErrorResponse;
pub use health::{HealthResponse, HealthStatus};
pub use webhook::{CommitPayload, PushWebhookRequest, WebhookResponse};
