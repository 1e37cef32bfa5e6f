//! Route definitions for the entregas API

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers;
use crate::services::Services;

/// Creates the router with all API routes
pub fn routes(services: Services) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health))
        // Delivery endpoints
        .route("/api/deliveries", get(handlers::list_deliveries))
        .route(
            "/api/deliveries/{id}/status",
            put(handlers::update_delivery_status),
        )
        // Add state to all routes
        .with_state(services)
}
