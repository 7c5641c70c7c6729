//! Customer HTTP handlers.
//!
//! - POST /api/dwolla/customer - Create a Dwolla customer

use axum::{extract::State, http::StatusCode};

use crate::{
    error::AppError,
    extractors::Json,
    models::customer::{CreateCustomerRequest, CustomerCreatedResponse},
    state::AppState,
};

/// Create a Dwolla customer.
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Merchant",
///   "email": "jane@example.com"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "customer_url": "https://api-sandbox.dwolla.com/customers/0f2d...",
///   "status": "created"
/// }
/// ```
///
/// Validation happens before Dwolla is contacted; a missing field never
/// produces an outbound call.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<CustomerCreatedResponse>, AppError> {
    request.validate()?;

    let url = state.dwolla.url("/customers");
    let customer_url = state
        .dwolla
        .post(&url, &request.to_dwolla_payload())
        .await?
        .require_status(&[StatusCode::CREATED], "Failed to create customer")?
        .location()?;

    tracing::info!(%customer_url, "Created customer");

    Ok(Json(CustomerCreatedResponse::new(customer_url)))
}
