//! Client for the Plaid sandbox helper service.
//!
//! The helper runs the Plaid Link flow on its own and hands out a processor
//! token for a sandbox bank account, which Dwolla accepts as `plaidToken` when
//! creating a funding source.

use reqwest::{StatusCode, header::CONTENT_TYPE};
use serde::Deserialize;

use crate::error::AppError;

/// Body returned by `POST /api/sandbox/processor_token`.
#[derive(Debug, Deserialize)]
struct ProcessorTokenResponse {
    processor_token: String,
    #[serde(default)]
    account_id: String,
    #[serde(default)]
    item_id: String,
}

#[derive(Debug, Clone)]
pub struct PlaidClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlaidClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a fresh sandbox processor token.
    ///
    /// # Errors
    ///
    /// Every failure (transport, non-200 status, bad body) is reported as
    /// `AppError::ProcessorToken` with the underlying reason.
    pub async fn processor_token(&self) -> Result<String, AppError> {
        let url = format!("{}/api/sandbox/processor_token", self.base_url);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body("{}")
            .send()
            .await
            .map_err(|e| AppError::ProcessorToken(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ProcessorToken(format!(
                "failed to get processor token, status: {}, body: {}",
                status.as_u16(),
                body
            )));
        }

        let result: ProcessorTokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::ProcessorToken(e.to_string()))?;

        tracing::info!(
            processor_token = %result.processor_token,
            account_id = %result.account_id,
            item_id = %result.item_id,
            "Got processor token from Plaid"
        );

        Ok(result.processor_token)
    }
}
