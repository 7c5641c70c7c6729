//! Authenticated client for the Dwolla REST API.
//!
//! This module handles:
//! - OAuth client-credentials token acquisition at startup
//! - Sending HAL+JSON requests with the bearer token attached
//! - Capturing the `Location` header of created resources
//!
//! # Token Lifetime
//!
//! The token is fetched once in [`DwollaClient::connect`] and kept for the life
//! of the process. It is not refreshed when it expires; a 401 from Dwolla is
//! relayed to the caller like any other upstream status.

use std::sync::Arc;

use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LOCATION},
};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, StartupError};

/// Media type Dwolla expects on every request and returns on every response.
pub const HAL_JSON: &str = "application/vnd.dwolla.v1.hal+json";

/// Body returned by `POST /token`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: i64,
}

/// Dwolla API client holding the access token obtained at startup.
#[derive(Debug, Clone)]
pub struct DwollaClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<str>,
}

/// Result of a Dwolla call that reached the server.
#[derive(Debug)]
pub struct DwollaResponse {
    pub status: StatusCode,

    /// Parsed JSON body, `None` when Dwolla sent an empty body
    pub body: Option<Value>,

    /// `Location` header of a `201 Created` response
    pub location: Option<String>,
}

impl DwollaClient {
    /// Obtain an access token and build a ready-to-use client.
    ///
    /// # Process
    ///
    /// 1. POST `grant_type=client_credentials` to `{base_url}/token`
    /// 2. Authenticate with HTTP basic auth (app key / app secret)
    /// 3. Keep the returned `access_token` for every later call
    ///
    /// # Errors
    ///
    /// Any transport failure, non-200 status or unparseable body is returned
    /// as `StartupError::Token`; the server must not start without a token.
    pub async fn connect(http: reqwest::Client, config: &Config) -> Result<Self, StartupError> {
        let token_url = format!("{}/token", config.dwolla_base_url);

        let response = http
            .post(&token_url)
            .basic_auth(&config.dwolla_app_key, Some(&config.dwolla_app_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| StartupError::Token(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(StartupError::Token(format!(
                "failed to get token, status: {}, body: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| StartupError::Token(e.to_string()))?;

        tracing::info!(expires_in = token.expires_in, "Dwolla token obtained");

        Ok(Self::with_token(
            http,
            config.dwolla_base_url.clone(),
            token.access_token,
        ))
    }

    /// Build a client around an already issued token.
    pub fn with_token(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Root URL of the Dwolla API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path below the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a single resource inside a collection, e.g. `/transfers/{id}`.
    ///
    /// The id must stay one path segment: separators, `.`/`..` and query or
    /// fragment markers are rejected, anything else is percent-encoded.
    pub fn resource_url(&self, collection: &str, id: &str) -> Result<String, AppError> {
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '?', '#']) {
            return Err(AppError::InvalidRequest(format!("Invalid resource id: {}", id)));
        }

        let mut url = url::Url::parse(&self.url(collection))
            .map_err(|e| AppError::Internal(format!("invalid Dwolla URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("Dwolla base URL cannot take a path".to_string()))?
            .push(id);

        Ok(url.to_string())
    }

    pub async fn get(&self, url: &str) -> Result<DwollaResponse, AppError> {
        self.send(Method::GET, url, None).await
    }

    pub async fn post(&self, url: &str, body: &Value) -> Result<DwollaResponse, AppError> {
        self.send(Method::POST, url, Some(body)).await
    }

    pub async fn delete(&self, url: &str) -> Result<DwollaResponse, AppError> {
        self.send(Method::DELETE, url, None).await
    }

    /// Send an authenticated request and read the whole response.
    ///
    /// # Headers Sent
    ///
    /// - `Authorization: Bearer <token>`
    /// - `Content-Type` / `Accept`: `application/vnd.dwolla.v1.hal+json`
    ///
    /// # Errors
    ///
    /// - `Http`: Dwolla could not be reached or the body could not be read
    /// - `Internal`: Dwolla sent a non-empty body that is not JSON
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<DwollaResponse, AppError> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, HAL_JSON)
            .header(ACCEPT, HAL_JSON);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| AppError::Internal(format!("failed to encode request: {}", e)))?;
            request = request.body(bytes);
        }

        let response = request.send().await?;
        let status = response.status();

        let location = if status == StatusCode::CREATED {
            response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        } else {
            None
        };

        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice::<Value>(&bytes).map_err(|_| {
                AppError::Internal(format!(
                    "failed to parse response: {}",
                    String::from_utf8_lossy(&bytes)
                ))
            })?)
        };

        tracing::debug!(%method, url, status = status.as_u16(), "Dwolla request complete");

        Ok(DwollaResponse {
            status,
            body,
            location,
        })
    }
}

impl DwollaResponse {
    /// Fail with the upstream status and body unless the status is one of `expected`.
    pub fn require_status(self, expected: &[StatusCode], message: &str) -> Result<Self, AppError> {
        if expected.contains(&self.status) {
            return Ok(self);
        }

        Err(AppError::UpstreamStatus {
            status: self.status,
            message: message.to_string(),
            details: self.body.unwrap_or(Value::Null),
        })
    }

    /// URL of the resource Dwolla just created.
    pub fn location(&self) -> Result<String, AppError> {
        self.location
            .clone()
            .ok_or_else(|| AppError::Internal("Location header missing from response".to_string()))
    }

    /// Response body, `null` when Dwolla sent none.
    pub fn into_body(self) -> Value {
        self.body.unwrap_or(Value::Null)
    }
}
