//! Outbound API clients and webhook processing.
//!
//! Services hold the logic that handlers call into: talking to Dwolla and
//! Plaid, verifying webhook signatures and buffering received events.

pub mod dwolla_client;
pub mod event_log;
pub mod plaid_client;
pub mod webhook_service;
