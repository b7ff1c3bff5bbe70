//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    analysis::run_submit,
    dashboard::dashboard,
    export::{export_matrix, export_provider},
    matrix::score_submit,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",             get(dashboard))
        .route("/run",          post(run_submit))
        .route("/matrix/score", post(score_submit))

        // CSV exports
        .route("/export/matrix",     get(export_matrix))
        .route("/export/{provider}", get(export_provider))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
