//! Webhook signature verification and notification logging.
//!
//! Dwolla signs every webhook with HMAC-SHA256 over the raw request body,
//! keyed by the secret given when the subscription was created, and sends
//! the lowercase hex digest in `X-Request-Signature-SHA-256`.

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "X-Request-Signature-SHA-256";

/// Verify a webhook signature against the shared secret.
///
/// # Rules
///
/// - No secret configured: verification is skipped and the payload accepted
/// - Otherwise the signature must equal `hex(HMAC-SHA256(secret, payload))`
///
/// # Errors
///
/// Returns `AppError::InvalidSignature` on mismatch, including an absent or
/// malformed signature.
pub fn verify_signature(
    secret: Option<&str>,
    payload: &[u8],
    signature: &str,
) -> Result<(), AppError> {
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        tracing::warn!("DWOLLA_WEBHOOK_SECRET not set, skipping signature verification");
        return Ok(());
    };

    let expected = generate_signature(secret, payload);

    if expected.len() != signature.len() {
        return Err(AppError::InvalidSignature);
    }

    if bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
        Ok(())
    } else {
        Err(AppError::InvalidSignature)
    }
}

/// Lowercase hex HMAC-SHA256 of `payload` keyed by `secret`.
pub fn generate_signature(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Fields of a notification that are logged and echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSummary {
    pub event_id: String,
    pub topic: String,
    pub timestamp: String,
    pub resource: Option<String>,
}

impl NotificationSummary {
    /// Read the summary fields from a notification body.
    ///
    /// Missing or non-string fields read as empty.
    pub fn from_event(event: &Value) -> Self {
        let text = |pointer: &str| {
            event
                .pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            event_id: text("/id").unwrap_or_default(),
            topic: text("/topic").unwrap_or_default(),
            timestamp: text("/timestamp").unwrap_or_default(),
            resource: text("/_links/resource/href"),
        }
    }
}

/// One-line description for topics the demo cares about.
pub fn describe_topic(topic: &str) -> Option<&'static str> {
    match topic {
        "transfer_completed" => Some("Transfer completed successfully"),
        "transfer_failed" => Some("Transfer failed"),
        "transfer_cancelled" => Some("Transfer cancelled"),
        "customer_created" => Some("Customer created"),
        "customer_funding_source_added" => Some("Funding source added"),
        "customer_funding_source_verified" => Some("Funding source verified"),
        _ => None,
    }
}

/// Log a received notification.
pub fn log_notification(summary: &NotificationSummary, event: &Value) {
    tracing::info!(
        received_at = %Utc::now().format("%Y-%m-%d %H:%M:%S"),
        event_id = %summary.event_id,
        topic = %summary.topic,
        timestamp = %summary.timestamp,
        resource = summary.resource.as_deref().unwrap_or("-"),
        "Webhook received"
    );

    match describe_topic(&summary.topic) {
        Some(description) => tracing::info!(topic = %summary.topic, "{}", description),
        None => tracing::info!(topic = %summary.topic, "Event: {}", summary.topic),
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        let pretty = serde_json::to_string_pretty(event).unwrap_or_default();
        tracing::debug!("Full webhook payload:\n{}", pretty);
    }
}
