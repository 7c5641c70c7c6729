//! Dwolla root resource model.

use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

/// Response for `GET /api/dwolla/accounts`.
///
/// # Example
///
/// ```json
/// {
///   "account_url": "https://api-sandbox.dwolla.com/accounts/ad5f2162-...",
///   "_links": { "account": { "href": "https://api-sandbox.dwolla.com/accounts/ad5f2162-..." } }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub account_url: String,

    /// Every link Dwolla returned on its root resource
    #[serde(rename = "_links")]
    pub links: Value,
}

impl AccountsResponse {
    /// Pick the master account URL out of the Dwolla root resource.
    pub fn from_root(root: Value) -> Result<Self, AppError> {
        let Value::Object(mut root) = root else {
            return Err(AppError::Internal("Invalid response format".to_string()));
        };

        let links = match root.remove("_links") {
            Some(links @ Value::Object(_)) => links,
            _ => return Err(AppError::Internal("Invalid response format".to_string())),
        };

        let account = links
            .get("account")
            .filter(|account| account.is_object())
            .ok_or_else(|| AppError::Internal("Account link not found".to_string()))?;

        let account_url = account
            .get("href")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Internal("Account href not found".to_string()))?
            .to_string();

        Ok(Self { account_url, links })
    }
}
