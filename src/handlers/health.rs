//! Health check endpoint for service monitoring.

use axum::extract::State;

use crate::extractors::Json;
use crate::models::health::HealthResponse;
use crate::state::AppState;

/// Health check handler.
///
/// Does not call upstream; a serving process already holds a Dwolla token.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "ok",
///   "dwolla_env": "sandbox",
///   "plaid_url": "http://localhost:8000",
///   "dwolla_url": "https://api-sandbox.dwolla.com"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        dwolla_env: state.config.dwolla_env.clone(),
        plaid_url: state.plaid.base_url().to_string(),
        dwolla_url: state.dwolla.base_url().to_string(),
    })
}
