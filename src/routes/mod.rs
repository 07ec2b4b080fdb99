//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and the static browser form under a
//! single Axum router. API routes live under `/api`; everything else falls
//! through to the form's static files.

pub mod catalog;
pub mod sessions;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/catalog", get(catalog::list_categories))
        .route("/api/catalog/lookup", get(catalog::lookup_operator))
        .route("/api/catalog/{category}", get(catalog::get_category))
        .route("/api/sessions", post(sessions::create_session))
        .route("/api/sessions/{id}", get(sessions::get_session).delete(sessions::end_session))
        .route(
            "/api/sessions/{id}/operators",
            post(sessions::add_operator).delete(sessions::remove_operator),
        )
        .route("/api/sessions/{id}/value", put(sessions::set_value))
        .route("/api/sessions/{id}/text", put(sessions::set_text))
        .route("/api/sessions/{id}/reset", post(sessions::reset))
        .route("/api/sessions/{id}/query", get(sessions::query_text))
        .route("/api/sessions/{id}/search", get(sessions::search_redirect))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes plus the browser form served from the configured static dir.
pub fn app(state: AppState) -> Router {
    let static_service = ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(static_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
