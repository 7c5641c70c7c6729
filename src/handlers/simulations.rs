//! Sandbox simulation handler.
//!
//! - POST /api/dwolla/simulate-transfer - Process or fail a pending sandbox transfer

use axum::{extract::State, http::StatusCode};

use crate::{
    error::AppError,
    extractors::Json,
    models::simulation::{SimulateTransferRequest, SimulationResponse, simulation_payload},
    state::AppState,
};

/// Simulate transfer processing in the Dwolla sandbox.
///
/// # Request Body
///
/// ```json
/// {
///   "transfer_url": "https://api-sandbox.dwolla.com/transfers/15c6bcce-...",
///   "action": "fail"
/// }
/// ```
///
/// `action` is `process` (default) or `fail`; failing attaches return code R01.
///
/// # Response (200)
///
/// ```json
/// {
///   "status": "simulated",
///   "action": "fail",
///   "transfer_url": "https://api-sandbox.dwolla.com/transfers/15c6bcce-...",
///   "message": "Transfer simulation initiated. Webhook should trigger transfer_failed event."
/// }
/// ```
pub async fn simulate_transfer(
    State(state): State<AppState>,
    Json(request): Json<SimulateTransferRequest>,
) -> Result<Json<SimulationResponse>, AppError> {
    let action = request.action()?;

    let url = state.dwolla.url("/sandbox-simulations");
    state
        .dwolla
        .post(&url, &simulation_payload(&request.transfer_url, action))
        .await?
        .require_status(
            &[StatusCode::CREATED, StatusCode::OK],
            "Failed to simulate transfer",
        )?;

    tracing::info!(
        %action,
        transfer_url = %request.transfer_url,
        "Simulated transfer {}, expect a transfer_{} webhook",
        action.outcome(),
        action.outcome()
    );

    Ok(Json(SimulationResponse::new(action, request.transfer_url)))
}
