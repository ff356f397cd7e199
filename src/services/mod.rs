//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! the notification providers and handlers.

pub mod notifications;
pub mod release;
mod release_service;

pub use release_service::{DispatchSummary, ReleaseService};

use std::sync::Arc;

use crate::config::SlackConfig;
use notifications::{DryRunProvider, NotificationProvider, SlackProvider};
use release::AnnouncementTemplate;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since services share their internals through `Arc`.
#[derive(Clone)]
pub struct Services {
    pub releases: ReleaseService,
}

impl Services {
    /// Creates services posting to Slack, or only logging when `dry_run` is set.
    ///
    /// # Arguments
    /// * `slack` - Resolved Slack settings
    /// * `client` - Shared outbound HTTP client
    pub fn new(slack: &SlackConfig, client: reqwest::Client) -> Self {
        let provider: Arc<dyn NotificationProvider> = if slack.dry_run {
            Arc::new(DryRunProvider)
        } else {
            Arc::new(SlackProvider::from_config(client, slack))
        };
        Self::with_provider(provider, AnnouncementTemplate::from(slack))
    }

    /// Creates services around an explicit provider.
    pub fn with_provider(
        provider: Arc<dyn NotificationProvider>,
        template: AnnouncementTemplate,
    ) -> Self {
        Self {
            releases: ReleaseService::new(provider, template),
        }
    }
}
