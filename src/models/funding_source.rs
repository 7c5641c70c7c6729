//! Funding source creation models.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::{non_empty, require};

/// Name given to the bank account when the caller sends none.
pub const DEFAULT_FUNDING_SOURCE_NAME: &str = "Bank Account";

/// Request to attach a Plaid-linked bank account to a customer.
///
/// # Example
///
/// ```json
/// {
///   "customer_url": "https://api-sandbox.dwolla.com/customers/0f2d...",
///   "name": "Jane's Checking"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateFundingSourceRequest {
    #[serde(default)]
    pub customer_url: String,

    /// Optional, defaults to "Bank Account"
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateFundingSourceRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require("customer_url", &self.customer_url)
    }

    /// Dwolla collection the funding source is created in.
    pub fn funding_sources_url(&self) -> String {
        format!("{}/funding-sources", self.customer_url)
    }

    /// Body for `POST {customer}/funding-sources`.
    pub fn to_dwolla_payload(&self, processor_token: &str) -> Value {
        let name = non_empty(self.name.clone())
            .unwrap_or_else(|| DEFAULT_FUNDING_SOURCE_NAME.to_string());

        json!({
            "plaidToken": processor_token,
            "name": name,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FundingSourceCreatedResponse {
    pub funding_source_url: String,
    pub status: &'static str,
}

impl FundingSourceCreatedResponse {
    pub fn new(funding_source_url: String) -> Self {
        Self {
            funding_source_url,
            status: "created",
        }
    }
}
