//! Route definitions

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers,
    middleware::{RequestIdLayer, cors_layer},
    state::AppState,
};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather API
        .route("/api/weather", get(handlers::weather::get_weather))
        .route("/api/geocoding", get(handlers::geocoding::get_suggestions))
        .with_state(state)
}

/// Router plus CORS, HTTP tracing and request ids, as served
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);
    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer)
}
