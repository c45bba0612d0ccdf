//! Thinkview server library - HTTP/WebSocket surface for the thinking-content classifier.
//!
//! Separated from main.rs so integration tests can drive the router directly.

pub mod config;
pub mod logging;
pub mod routes;
pub mod state;
pub mod websocket;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/classify", post(routes::classify::classify))
        .route("/display", post(routes::classify::display))
        .route("/summary", post(routes::classify::summary))
        .route("/health", get(routes::health));

    let ws_routes = Router::new().route("/stream", get(routes::ws::upgrade));

    Router::new()
        .nest("/api", api_routes)
        .nest("/ws", ws_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
