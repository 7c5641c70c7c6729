//! Webhook subscription and notification models.
//!
//! # Webhook Flow
//!
//! 1. A subscription is registered with Dwolla via `POST /api/dwolla/webhook-subscription`
//! 2. Dwolla POSTs signed notifications to `/api/dwolla/webhook`
//! 3. The signature is verified with the shared secret and the event is buffered
//!
//! # Defaults
//!
//! When the caller omits them, the subscription URL is derived from
//! `WEBHOOK_BASE_URL` and the secret comes from `DWOLLA_WEBHOOK_SECRET`.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::Config;
use crate::error::AppError;
use crate::models::non_empty;

/// Path Dwolla delivers notifications to.
pub const WEBHOOK_PATH: &str = "/api/dwolla/webhook";

/// Request to register a webhook subscription.
///
/// # Example
///
/// ```json
/// {
///   "url": "https://demo.example.com/api/dwolla/webhook",
///   "secret": "my-shared-secret"
/// }
/// ```
///
/// Both fields are optional and fall back to configuration.
#[derive(Debug, Default, Deserialize)]
pub struct CreateWebhookSubscriptionRequest {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub secret: Option<String>,
}

/// Subscription parameters after applying configured defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSubscription {
    pub url: String,
    pub secret: String,
}

impl CreateWebhookSubscriptionRequest {
    /// Fill in missing values from configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if neither the request nor configuration supplies a URL
    /// - `InvalidRequest` if neither supplies a secret
    /// - `InvalidRequest` if the URL is not an absolute http(s) URL
    pub fn resolve(self, config: &Config) -> Result<ResolvedSubscription, AppError> {
        let url = match non_empty(self.url) {
            Some(url) => url,
            None => match config.webhook_base_url.as_deref() {
                Some(base) => format!("{}{}", base, WEBHOOK_PATH),
                None => {
                    return Err(AppError::InvalidRequest(
                        "webhook URL not provided and WEBHOOK_BASE_URL not set".to_string(),
                    ));
                }
            },
        };

        let secret = non_empty(self.secret)
            .or_else(|| config.dwolla_webhook_secret.clone())
            .ok_or_else(|| {
                AppError::InvalidRequest(
                    "webhook secret not provided and DWOLLA_WEBHOOK_SECRET not set".to_string(),
                )
            })?;

        validate_webhook_url(&url)?;

        Ok(ResolvedSubscription { url, secret })
    }
}

impl ResolvedSubscription {
    /// Body for `POST /webhook-subscriptions`.
    pub fn to_dwolla_payload(&self) -> Value {
        json!({
            "url": self.url,
            "secret": self.secret,
        })
    }
}

/// Reject URLs Dwolla could never deliver to.
fn validate_webhook_url(url: &str) -> Result<(), AppError> {
    let parsed = url::Url::parse(url)
        .map_err(|_| AppError::InvalidRequest("Invalid webhook URL format".to_string()))?;

    match parsed.scheme() {
        "https" | "http" => Ok(()),
        _ => Err(AppError::InvalidRequest(
            "Webhook URL must use HTTP or HTTPS".to_string(),
        )),
    }
}

#[derive(Debug, Serialize)]
pub struct SubscriptionCreatedResponse {
    pub subscription_url: String,
    pub webhook_url: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionDeletedResponse {
    pub status: &'static str,
    pub subscription_id: String,
}

/// Acknowledgement returned to Dwolla for every accepted notification.
#[derive(Debug, Serialize)]
pub struct WebhookReceivedResponse {
    pub status: &'static str,
    pub event_id: String,
    pub topic: String,
}
