//! Health check endpoint
//!
//! The process is healthy as soon as it serves requests. The artist listing
//! is fetched once in the background, so its progress is reported separately
//! and never turns the status away from "ok": a failed fetch is final until
//! restart and shows up as `listing: "failed"`.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Progress of the one-shot artist fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub listing: ListingStatus,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let listing = if state.query.is_loading().await {
        ListingStatus::Loading
    } else if state.query.has_failed().await {
        ListingStatus::Failed
    } else {
        ListingStatus::Ready
    };

    Json(HealthResponse {
        status: "ok",
        module: "navemae-artists",
        version: env!("CARGO_PKG_VERSION"),
        listing,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
