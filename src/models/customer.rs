//! Customer creation models.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::require;

/// Request to create a Dwolla customer.
///
/// # Example
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Merchant",
///   "email": "jane@example.com"
/// }
/// ```
///
/// # Validation
///
/// All three fields are required and must be non-empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require("firstName", &self.first_name)?;
        require("lastName", &self.last_name)?;
        require("email", &self.email)
    }

    /// Body for `POST /customers`.
    pub fn to_dwolla_payload(&self) -> Value {
        json!({
            "firstName": self.first_name,
            "lastName": self.last_name,
            "email": self.email,
        })
    }
}

/// Response after Dwolla created the customer.
#[derive(Debug, Serialize)]
pub struct CustomerCreatedResponse {
    pub customer_url: String,
    pub status: &'static str,
}

impl CustomerCreatedResponse {
    pub fn new(customer_url: String) -> Self {
        Self {
            customer_url,
            status: "created",
        }
    }
}
