//! Dwolla Transfer Demo - Main Application Entry Point
//!
//! This is a REST API server that proxies the Dwolla payments API and a Plaid
//! sandbox helper. It creates customers, attaches bank accounts as funding
//! sources, initiates and simulates transfers, and receives signed webhooks.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream**: Dwolla REST API and Plaid helper via reqwest
//! - **Webhooks**: HMAC-SHA256 verification, last 50 events kept in memory
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Obtain a Dwolla access token (startup fails without one)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod extractors;
mod handlers;
mod models;
mod routes;
mod services;
mod state;

#[cfg(test)]
mod tests;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env().map_err(error::StartupError::from)?;
    tracing::info!(
        dwolla_env = %config.dwolla_env,
        dwolla_url = %config.dwolla_base_url,
        plaid_url = %config.plaid_api_url,
        "Configuration loaded"
    );
    let port = config.app_port;

    // Token acquisition happens here; failure keeps the server from binding
    let state = state::AppState::initialize(config).await?;

    let app = routes::build_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dwolla Transfer Demo server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
