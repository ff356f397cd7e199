//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::Settings;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since Services and the settings are shared.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Resolved configuration, read-only after start-up
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Creates a new AppState from resolved settings and the outbound client.
    ///
    /// # Arguments
    /// * `settings` - Validated configuration
    /// * `client` - HTTP client injected into the Slack provider
    ///
    /// # Example
    /// ```ignore
    /// let client = build_http_client(&settings.http)?;
    /// let state = AppState::new(settings, client);
    /// ```
    pub fn new(settings: Settings, client: reqwest::Client) -> Self {
        let services = Services::new(&settings.slack, client);
        Self::from_parts(services, settings)
    }

    /// Assembles state from already built services.
    pub fn from_parts(services: Services, settings: Settings) -> Self {
        Self {
            services,
            settings: Arc::new(settings),
        }
    }
}
