//! Transfer HTTP handlers.
//!
//! This module implements transfer-related API endpoints:
//! - POST /api/dwolla/transfer - Move money between funding sources
//! - GET /api/dwolla/transfer/{id} - Get transfer details

use axum::{extract::State, http::StatusCode};
use serde_json::Value;

use crate::{
    error::AppError,
    extractors::{Json, Path},
    models::transfer::{CreateTransferRequest, TransferCreatedResponse},
    state::AppState,
};

/// Initiate a transfer.
///
/// # Request Body
///
/// ```json
/// {
///   "source": "https://api-sandbox.dwolla.com/funding-sources/707177c3-...",
///   "destination": "https://api-sandbox.dwolla.com/funding-sources/AB443D36-...",
///   "amount": 10.5,
///   "currency": "USD"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "transfer_url": "https://api-sandbox.dwolla.com/transfers/15c6bcce-...",
///   "status": "created"
/// }
/// ```
pub async fn create_transfer(
    State(state): State<AppState>,
    Json(request): Json<CreateTransferRequest>,
) -> Result<Json<TransferCreatedResponse>, AppError> {
    request.validate()?;

    let url = state.dwolla.url("/transfers");
    let transfer_url = state
        .dwolla
        .post(&url, &request.to_dwolla_payload())
        .await?
        .require_status(&[StatusCode::CREATED], "Failed to create transfer")?
        .location()?;

    tracing::info!(%transfer_url, "Created transfer");

    Ok(Json(TransferCreatedResponse::new(transfer_url)))
}

/// Get a transfer by ID.
///
/// Returns the Dwolla transfer resource unchanged. An id that would leave the
/// `/transfers` collection is rejected with 400.
pub async fn get_transfer(
    State(state): State<AppState>,
    Path(transfer_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let url = state.dwolla.resource_url("/transfers", &transfer_id)?;

    let transfer = state
        .dwolla
        .get(&url)
        .await?
        .require_status(&[StatusCode::OK], "Failed to get transfer")?
        .into_body();

    Ok(Json(transfer))
}
