//! navemae-artists library - Artist roster module
//!
//! Serves the studio network's artist roster: metric cards, search and
//! status filtering over a listing fetched once from the backend.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod dashboard;
pub mod query;
pub mod source;

use query::ArtistQuery;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Single-shot artist query
    pub query: Arc<ArtistQuery>,
}

impl AppState {
    /// Create new application state
    pub fn new(query: Arc<ArtistQuery>) -> Self {
        Self { query }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/artists", get(api::get_artists))
        .route("/api/buildinfo", get(api::get_build_info));

    let ui = Router::new()
        .route("/", get(api::serve_dashboard))
        .route("/static/dashboard.css", get(api::serve_dashboard_css))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(ui)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
