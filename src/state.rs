//! Shared service state handed to every handler.
//!
//! Replaces process-wide globals: the Dwolla token, the outbound clients and
//! the webhook event log are owned here and injected through axum's `State`.

use std::sync::Arc;

use crate::config::Config;
use crate::error::StartupError;
use crate::services::dwolla_client::DwollaClient;
use crate::services::event_log::WebhookEventLog;
use crate::services::plaid_client::PlaidClient;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dwolla: DwollaClient,
    pub plaid: PlaidClient,
    pub events: Arc<WebhookEventLog>,
}

impl AppState {
    /// Build the state the server runs with.
    ///
    /// # Startup Flow
    ///
    /// 1. Build one HTTP client with the configured upstream timeout
    /// 2. Fetch a Dwolla access token (fails startup if this fails)
    /// 3. Create an empty webhook event log
    pub async fn initialize(config: Config) -> Result<Self, StartupError> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()
            .map_err(StartupError::Client)?;

        let dwolla = DwollaClient::connect(http.clone(), &config).await?;
        let plaid = PlaidClient::new(http, config.plaid_api_url.clone());

        Ok(Self::new(config, dwolla, plaid))
    }

    pub fn new(config: Config, dwolla: DwollaClient, plaid: PlaidClient) -> Self {
        Self {
            config: Arc::new(config),
            dwolla,
            plaid,
            events: Arc::new(WebhookEventLog::new()),
        }
    }
}
