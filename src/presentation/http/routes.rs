//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/places", place_routes())
        .nest("/users", user_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    metrics::update_db_pool_stats(
        state.db.num_idle() as u32,
        state.db.size().saturating_sub(state.db.num_idle() as u32),
        state.settings.database.max_connections,
    );

    let body = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

/// Place routes
fn place_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::place::create_place))
        .route("/user/{user_id}", get(handlers::place::get_places_by_user))
        .route("/{pid}", get(handlers::place::get_place))
        .route("/{pid}", patch(handlers::place::update_place))
        .route("/{pid}", delete(handlers::place::delete_place))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::user::get_users))
        .route("/signup", post(handlers::user::signup))
        .route("/login", post(handlers::user::login))
}
