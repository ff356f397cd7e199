//! Release announcement dispatch for incoming commit lists.

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::models::Commit;
use crate::services::notifications::NotificationProvider;
use crate::services::release::{AnnouncementTemplate, classify};

/// Counters for one processed commit list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    /// Commits in the payload
    pub received: usize,
    /// Commits whose title carried a release marker
    pub releases: usize,
    /// Announcements accepted by the provider
    pub delivered: usize,
    /// Announcements that errored or were rejected
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommitOutcome {
    Skipped,
    Delivered,
    Failed,
}

/// Classifies commits and announces the release ones.
///
/// Cloning is cheap; the provider and template are shared.
#[derive(Clone)]
pub struct ReleaseService {
    provider: Arc<dyn NotificationProvider>,
    template: Arc<AnnouncementTemplate>,
}

impl ReleaseService {
    /// Creates a new ReleaseService
    ///
    /// # Arguments
    /// * `provider` - Transport used for every announcement
    /// * `template` - Changelog link and image shared by all announcements
    pub fn new(provider: Arc<dyn NotificationProvider>, template: AnnouncementTemplate) -> Self {
        Self {
            provider,
            template: Arc::new(template),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Processes commits in payload order, one send at a time.
    ///
    /// A failed delivery is logged and counted; the remaining commits are
    /// still processed.
    ///
    /// # Returns
    /// Counters describing what happened to the list
    pub async fn process_commits(&self, commits: &[Commit]) -> DispatchSummary {
        let mut summary = DispatchSummary {
            received: commits.len(),
            ..Default::default()
        };

        for (index, commit) in commits.iter().enumerate() {
            let span = tracing::info_span!("commit", index, id = commit.short_id());
            match self.process_commit(commit).instrument(span).await {
                CommitOutcome::Skipped => {}
                CommitOutcome::Delivered => {
                    summary.releases += 1;
                    summary.delivered += 1;
                }
                CommitOutcome::Failed => {
                    summary.releases += 1;
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            received = summary.received,
            releases = summary.releases,
            delivered = summary.delivered,
            failed = summary.failed,
            "Commit list processed"
        );

        summary
    }

    async fn process_commit(&self, commit: &Commit) -> CommitOutcome {
        let release = classify(&commit.title);
        if !release.is_release {
            tracing::debug!(title = %commit.title, "Not a release commit, skipping");
            return CommitOutcome::Skipped;
        }

        let message = self.template.render(commit, &release);

        match self.provider.send(&message).await {
            Ok(result) if result.success => {
                tracing::info!(
                    version = %release.version,
                    provider = self.provider.name(),
                    status = ?result.status_code,
                    duration_ms = result.duration_ms,
                    "Release announcement delivered"
                );
                CommitOutcome::Delivered
            }
            Ok(result) => {
                tracing::warn!(
                    version = %release.version,
                    provider = self.provider.name(),
                    status = ?result.status_code,
                    response = result.response.as_deref().unwrap_or(""),
                    "Release announcement rejected"
                );
                CommitOutcome::Failed
            }
            Err(e) => {
                tracing::error!(
                    version = %release.version,
                    provider = self.provider.name(),
                    error = %e,
                    "Release announcement failed"
                );
                CommitOutcome::Failed
            }
        }
    }
}
