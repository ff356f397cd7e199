//! Push webhook request and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Commit;
use crate::services::DispatchSummary;

/// Push event body; fields other than `commits` are ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "commits": [{
        "id": "b6568db1bc1dcd7f8b4d5a946b0b91f9dacd7327",
        "title": "chore(release): 1.4.0 [skip ci]",
        "message": "chore(release): 1.4.0 [skip ci]\n\n### Features\n\n* **ui:** dark mode"
    }]
}))]
pub struct PushWebhookRequest {
    pub commits: Vec<CommitPayload>,
}

/// One commit of a push event
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommitPayload {
    /// Commit SHA
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub message: String,
}

impl From<CommitPayload> for Commit {
    fn from(payload: CommitPayload) -> Self {
        Commit {
            id: payload.id,
            title: payload.title,
            message: payload.message,
        }
    }
}

impl PushWebhookRequest {
    pub fn into_commits(self) -> Vec<Commit> {
        self.commits.into_iter().map(Commit::from).collect()
    }
}

/// Outcome of a processed push event
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"received": 3, "releases": 1, "delivered": 1, "failed": 0}))]
pub struct WebhookResponse {
    /// Commits in the payload
    pub received: usize,
    /// Commits recognised as releases
    pub releases: usize,
    /// Announcements accepted by Slack
    pub delivered: usize,
    /// Announcements that could not be delivered
    pub failed: usize,
}

impl From<DispatchSummary> for WebhookResponse {
    fn from(summary: DispatchSummary) -> Self {
        Self {
            received: summary.received,
            releases: summary.releases,
            delivered: summary.delivered,
            failed: summary.failed,
        }
    }
}
