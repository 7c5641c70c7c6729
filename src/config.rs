//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DWOLLA_APP_KEY` (required): Dwolla application key
/// - `DWOLLA_APP_SECRET` (required): Dwolla application secret
/// - `DWOLLA_ENV` (optional): environment name, defaults to `sandbox`
/// - `DWOLLA_BASE_URL` (optional): Dwolla API root, defaults to the sandbox URL
/// - `PLAID_API_URL` (optional): Plaid helper service, defaults to `http://localhost:8000`
/// - `APP_PORT` (optional): HTTP server port, defaults to 8001
/// - `DWOLLA_WEBHOOK_SECRET` (optional): shared secret for webhook signatures
/// - `WEBHOOK_BASE_URL` (optional): public base URL used to self-register webhooks
/// - `UPSTREAM_TIMEOUT_SECS` (optional): outbound request timeout, defaults to 30
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dwolla_app_key: String,

    pub dwolla_app_secret: String,

    #[serde(default = "default_env")]
    pub dwolla_env: String,

    #[serde(default = "default_dwolla_base_url")]
    pub dwolla_base_url: String,

    #[serde(default = "default_plaid_api_url")]
    pub plaid_api_url: String,

    #[serde(default = "default_port")]
    pub app_port: u16,

    #[serde(default)]
    pub dwolla_webhook_secret: Option<String>,

    #[serde(default)]
    pub webhook_base_url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

fn default_env() -> String {
    "sandbox".to_string()
}

fn default_dwolla_base_url() -> String {
    "https://api-sandbox.dwolla.com".to_string()
}

fn default_plaid_api_url() -> String {
    "http://localhost:8000".to_string()
}

/// Default port if APP_PORT environment variable is not set.
fn default_port() -> u16 {
    8001
}

fn default_timeout_secs() -> u64 {
    30
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error(
        "DWOLLA_APP_KEY or DWOLLA_APP_SECRET is not set. Did you copy .env.example to .env and fill it out?"
    )]
    MissingCredentials,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Dwolla credentials are missing or empty
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>().map_err(|e| match e {
            envy::Error::MissingValue(_) => ConfigError::MissingCredentials,
            other => ConfigError::Env(other),
        })?;

        config.normalize()
    }

    /// Validate required values and canonicalize optional ones.
    ///
    /// Empty optional values are treated as unset and trailing slashes are
    /// trimmed from base URLs so paths can be appended directly.
    pub fn normalize(mut self) -> Result<Self, ConfigError> {
        if self.dwolla_app_key.trim().is_empty() || self.dwolla_app_secret.trim().is_empty() {
            return Err(ConfigError::MissingCredentials);
        }

        self.dwolla_base_url = self.dwolla_base_url.trim_end_matches('/').to_string();
        self.plaid_api_url = self.plaid_api_url.trim_end_matches('/').to_string();
        self.dwolla_webhook_secret = self.dwolla_webhook_secret.filter(|s| !s.is_empty());
        self.webhook_base_url = self
            .webhook_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(self)
    }

    /// Timeout applied to every outbound Dwolla and Plaid request.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
