//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Validates it and calls Dwolla or Plaid
//! 3. Returns HTTP response (JSON, status code)

/// Dwolla master account
pub mod accounts;
/// Customer creation
pub mod customers;
/// Funding source creation
pub mod funding_sources;
/// Service health
pub mod health;
/// Sandbox transfer simulation
pub mod simulations;
/// Transfer creation and lookup
pub mod transfers;
/// Webhook subscriptions and notifications
pub mod webhooks;
