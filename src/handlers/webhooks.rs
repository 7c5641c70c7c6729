//! HTTP handlers for Dwolla webhooks.
//!
//! This module covers both sides of webhook handling:
//! - Managing subscriptions on Dwolla (create, list, delete)
//! - Receiving signed notifications and exposing the buffered events

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    extractors::{Json, Path},
    models::webhook::{
        CreateWebhookSubscriptionRequest, SubscriptionCreatedResponse,
        SubscriptionDeletedResponse, WebhookReceivedResponse,
    },
    services::webhook_service::{
        NotificationSummary, SIGNATURE_HEADER, log_notification, verify_signature,
    },
    state::AppState,
};

/// Register a webhook subscription with Dwolla.
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://demo.example.com/api/dwolla/webhook",
///   "secret": "my-shared-secret"
/// }
/// ```
///
/// Both fields are optional. The URL defaults to
/// `{WEBHOOK_BASE_URL}/api/dwolla/webhook` and the secret to
/// `DWOLLA_WEBHOOK_SECRET`; if either is still missing the request is
/// rejected with 400 before Dwolla is contacted.
///
/// # Response (200)
///
/// ```json
/// {
///   "subscription_url": "https://api-sandbox.dwolla.com/webhook-subscriptions/5af4c10a-...",
///   "webhook_url": "https://demo.example.com/api/dwolla/webhook",
///   "status": "created"
/// }
/// ```
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(request): Json<CreateWebhookSubscriptionRequest>,
) -> Result<Json<SubscriptionCreatedResponse>, AppError> {
    let subscription = request.resolve(&state.config)?;

    let url = state.dwolla.url("/webhook-subscriptions");
    let subscription_url = state
        .dwolla
        .post(&url, &subscription.to_dwolla_payload())
        .await?
        .require_status(
            &[StatusCode::CREATED],
            "Failed to create webhook subscription",
        )?
        .location()?;

    tracing::info!(
        %subscription_url,
        webhook_url = %subscription.url,
        "Created webhook subscription"
    );

    Ok(Json(SubscriptionCreatedResponse {
        subscription_url,
        webhook_url: subscription.url,
        status: "created",
    }))
}

/// List webhook subscriptions.
///
/// Returns Dwolla's subscription collection unchanged.
pub async fn list_subscriptions(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let url = state.dwolla.url("/webhook-subscriptions");

    let subscriptions = state
        .dwolla
        .get(&url)
        .await?
        .require_status(&[StatusCode::OK], "Failed to list webhook subscriptions")?
        .into_body();

    Ok(Json(subscriptions))
}

/// Delete a webhook subscription.
///
/// Dwolla answers 200 with the removed subscription or 204; both count as
/// success.
pub async fn delete_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
) -> Result<Json<SubscriptionDeletedResponse>, AppError> {
    let url = state
        .dwolla
        .resource_url("/webhook-subscriptions", &subscription_id)?;

    state.dwolla.delete(&url).await?.require_status(
        &[StatusCode::OK, StatusCode::NO_CONTENT],
        "Failed to delete webhook subscription",
    )?;

    tracing::info!(%subscription_id, "Deleted webhook subscription");

    Ok(Json(SubscriptionDeletedResponse {
        status: "deleted",
        subscription_id,
    }))
}

/// Receive a webhook notification from Dwolla.
///
/// # Process
///
/// 1. Verify `X-Request-Signature-SHA-256` against the raw body
/// 2. Parse the body as a JSON object
/// 3. Log the notification and append it to the event log
///
/// # Response
///
/// - **200 OK**: `{"status": "received", "event_id": "...", "topic": "..."}`
/// - **401**: signature mismatch, payload discarded
/// - **400**: body is not a JSON object
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookReceivedResponse>, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if let Err(e) = verify_signature(
        state.config.dwolla_webhook_secret.as_deref(),
        &body,
        signature,
    ) {
        tracing::warn!("Webhook signature verification failed");
        return Err(e);
    }

    let event = serde_json::from_slice::<Map<String, Value>>(&body)
        .map(Value::Object)
        .map_err(|_| AppError::InvalidRequest("Invalid JSON payload".to_string()))?;

    let summary = NotificationSummary::from_event(&event);
    log_notification(&summary, &event);
    state.events.record(event);

    Ok(Json(WebhookReceivedResponse {
        status: "received",
        event_id: summary.event_id,
        topic: summary.topic,
    }))
}

/// List buffered webhook events, oldest first.
///
/// At most the 50 most recent notifications are kept.
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.events.snapshot())
}
