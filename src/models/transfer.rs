//! Transfer creation models.
//!
//! Dwolla takes amounts as decimal strings with two fractional digits, so the
//! float received from the caller is formatted before it leaves the service.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::{non_empty, require};

pub const DEFAULT_CURRENCY: &str = "USD";

/// Request to move money between two funding sources.
///
/// # Example
///
/// ```json
/// {
///   "source": "https://api-sandbox.dwolla.com/funding-sources/707177c3-...",
///   "destination": "https://api-sandbox.dwolla.com/funding-sources/AB443D36-...",
///   "amount": 10.5,
///   "currency": "USD"  // optional, defaults to USD
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub destination: String,

    /// Required, zero counts as missing
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub currency: Option<String>,
}

impl CreateTransferRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require("source", &self.source)?;
        require("destination", &self.destination)?;

        match self.amount {
            Some(amount) if amount != 0.0 => Ok(()),
            _ => Err(AppError::InvalidRequest("amount is required".to_string())),
        }
    }

    /// Body for `POST /transfers`.
    ///
    /// ```json
    /// {
    ///   "_links": {
    ///     "source": { "href": "..." },
    ///     "destination": { "href": "..." }
    ///   },
    ///   "amount": { "currency": "USD", "value": "10.50" }
    /// }
    /// ```
    pub fn to_dwolla_payload(&self) -> Value {
        let currency =
            non_empty(self.currency.clone()).unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        json!({
            "_links": {
                "source": { "href": self.source },
                "destination": { "href": self.destination },
            },
            "amount": {
                "currency": currency,
                "value": format_amount(self.amount.unwrap_or_default()),
            },
        })
    }
}

/// Two-decimal string representation of an amount.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[derive(Debug, Serialize)]
pub struct TransferCreatedResponse {
    pub transfer_url: String,
    pub status: &'static str,
}

impl TransferCreatedResponse {
    pub fn new(transfer_url: String) -> Self {
        Self {
            transfer_url,
            status: "created",
        }
    }
}
