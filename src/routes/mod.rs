//! Router assembly.
//!
//! All endpoints read from the immutable [`AppState`]; there are no write
//! routes. The JSON API mirrors the view projections one-to-one, and the
//! index page renders the same projections as escaped HTML fragments.

pub mod logs;
pub mod pages;
pub mod standards;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Bind all HTTP endpoints into the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::index))
        .route("/standard/{category}/{code}", get(pages::standard_page))
        .route("/api/standards", get(standards::list_standards))
        .route("/api/detail/{category}/{code}", get(standards::standard_detail))
        .route("/api/logs", get(logs::list_logs))
        .route("/api/export", get(logs::export_change_log))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
