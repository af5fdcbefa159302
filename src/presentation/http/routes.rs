//! Route Configuration
//!
//! Configures all HTTP routes for the API. The customer endpoints are
//! mounted both unversioned (`/api/User/...`) and under the `v1` prefix
//! (`/api/User/v1/...`).

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{auth_middleware, security_headers, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/User", user_api_routes(state.clone()))
        // Versioned alias; same handlers, same semantics
        .nest("/api/User/v1", user_api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        // Per-request metrics recording
        .layer(middleware::from_fn(track_metrics))
        // Security headers are added to all responses
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Customer API routes: public login plus protected record operations
fn user_api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/Login", post(handlers::auth::login))
        .merge(protected_routes(state))
}

/// Routes requiring a valid bearer token (admin or client role)
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/EditUser/{id}", put(handlers::customer::edit_customer))
        .route("/GetDistance/{id}", get(handlers::customer::get_distance))
        .route("/SearchUser", get(handlers::customer::search_customers))
        .route(
            "/GetCustomerListByZipCode",
            get(handlers::customer::customers_by_zip),
        )
        // Admin-only; the handler enforces the role
        .route(
            "/GetAllCustomerList",
            get(handlers::customer::all_customers),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
