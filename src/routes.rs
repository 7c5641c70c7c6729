//! HTTP route table.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every endpoint mounted.
///
/// None of the routes require authentication.
pub fn build_router(state: AppState) -> Router {
    let dwolla_routes = Router::new()
        .route("/accounts", get(handlers::accounts::get_accounts))
        .route("/customer", post(handlers::customers::create_customer))
        .route(
            "/funding-source",
            post(handlers::funding_sources::create_funding_source),
        )
        .route("/transfer", post(handlers::transfers::create_transfer))
        .route("/transfer/{id}", get(handlers::transfers::get_transfer))
        // Webhook routes
        .route(
            "/webhook-subscription",
            post(handlers::webhooks::create_subscription),
        )
        .route(
            "/webhook-subscriptions",
            get(handlers::webhooks::list_subscriptions),
        )
        .route(
            "/webhook-subscription/{id}",
            delete(handlers::webhooks::delete_subscription),
        )
        .route("/webhook", post(handlers::webhooks::receive_webhook))
        .route("/webhook-events", get(handlers::webhooks::list_events))
        // Sandbox simulation routes
        .route(
            "/simulate-transfer",
            post(handlers::simulations::simulate_transfer),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api/dwolla", dwolla_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
