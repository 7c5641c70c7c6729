//! Health check response model.

use serde::Serialize;

/// Health check response.
///
/// Reports which Dwolla environment and upstream URLs the server talks to.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` once the server is serving
    pub status: &'static str,

    pub dwolla_env: String,

    pub plaid_url: String,

    pub dwolla_url: String,
}
