//! API Routes
//!
//! Configures the Axum router with all control API endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, expiry_handler, get_handler, health_handler, set_handler, stats_handler,
    timeout_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /arp` - Record an IP to MAC mapping
/// - `GET /arp/:ip` - Look up a mapping
/// - `DELETE /arp/:ip` - Invalidate a mapping
/// - `PUT /arp/:ip/expiry` - Move a mapping's expiry
/// - `PUT /config/timeout` - Change the default lifetime
/// - `GET /stats` - Occupancy snapshot
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/arp", put(set_handler))
        .route("/arp/:ip", get(get_handler).delete(delete_handler))
        .route("/arp/:ip/expiry", put(expiry_handler))
        .route("/config/timeout", put(timeout_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
