//! Dwolla master account handler.
//!
//! - GET /api/dwolla/accounts - Resolve the master account from the API root

use axum::{extract::State, http::StatusCode};

use crate::{
    error::AppError, extractors::Json, models::account::AccountsResponse, state::AppState,
};

/// Get the Dwolla master account URL.
///
/// # Endpoint
///
/// `GET /api/dwolla/accounts`
///
/// # Response
///
/// - **Success (200 OK)**: the account URL plus every root link
/// - **Error (upstream status)**: Dwolla rejected the call, body in `details`
/// - **Error (500)**: Dwolla unreachable or root resource has no account link
pub async fn get_accounts(
    State(state): State<AppState>,
) -> Result<Json<AccountsResponse>, AppError> {
    let url = state.dwolla.url("");

    let root = state
        .dwolla
        .get(&url)
        .await?
        .require_status(&[StatusCode::OK], "Failed to get accounts")?
        .into_body();

    Ok(Json(AccountsResponse::from_root(root)?))
}
