//! API module for the entregas backend

pub mod guard;
pub mod handlers;
pub mod routes;
pub mod validation;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Method,
    },
    middleware, Router,
};
use tower_http::cors::CorsLayer;

use crate::services::Services;

/// Creates the axum application with all routes and middleware
pub fn create_app(services: Services) -> Router {
    let router = routes::routes(services.clone());

    // Add CORS layer for permissive access
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(false);

    router
        .layer(middleware::from_fn_with_state(
            services,
            guard::require_database,
        ))
        .layer(cors)
}
