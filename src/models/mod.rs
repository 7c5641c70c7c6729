//! Request and response bodies for the proxy endpoints.
//!
//! Upstream Dwolla resources stay as `serde_json::Value`; only the bodies this
//! service accepts or produces are typed here.

/// Dwolla root resource
pub mod account;
/// Customer creation
pub mod customer;
/// Funding source creation
pub mod funding_source;
/// Health check
pub mod health;
/// Sandbox transfer simulation
pub mod simulation;
/// Transfer creation
pub mod transfer;
/// Webhook subscriptions and notifications
pub mod webhook;

use crate::error::AppError;

/// Reject a required string field that is absent or empty.
pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// Value for an optional string field, treating empty as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
