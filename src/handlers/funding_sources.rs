//! Funding source HTTP handlers.
//!
//! - POST /api/dwolla/funding-source - Attach a Plaid-linked bank account

use axum::{extract::State, http::StatusCode};

use crate::{
    error::AppError,
    extractors::Json,
    models::funding_source::{CreateFundingSourceRequest, FundingSourceCreatedResponse},
    state::AppState,
};

/// Add a bank account as a funding source for a customer.
///
/// # Process
///
/// 1. Validate the request
/// 2. Get a processor token from the Plaid helper
/// 3. POST it to `{customer_url}/funding-sources` as `plaidToken`
///
/// # Request Body
///
/// ```json
/// {
///   "customer_url": "https://api-sandbox.dwolla.com/customers/0f2d...",
///   "name": "Checking"  // optional, defaults to "Bank Account"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "funding_source_url": "https://api-sandbox.dwolla.com/funding-sources/707177c3-...",
///   "status": "created"
/// }
/// ```
pub async fn create_funding_source(
    State(state): State<AppState>,
    Json(request): Json<CreateFundingSourceRequest>,
) -> Result<Json<FundingSourceCreatedResponse>, AppError> {
    request.validate()?;

    let processor_token = state.plaid.processor_token().await?;

    let funding_source_url = state
        .dwolla
        .post(
            &request.funding_sources_url(),
            &request.to_dwolla_payload(&processor_token),
        )
        .await?
        .require_status(&[StatusCode::CREATED], "Failed to create funding source")?
        .location()?;

    tracing::info!(%funding_source_url, "Created funding source");

    Ok(Json(FundingSourceCreatedResponse::new(funding_source_url)))
}
