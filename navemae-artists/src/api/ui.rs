//! UI serving routes
//!
//! Renders the roster page server-side from the current query state

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;

use navemae_common::derive_view_model;

use crate::api::artists::{RosterError, RosterQuery};
use crate::dashboard::{self, DashboardPage};
use crate::AppState;

const DASHBOARD_CSS: &str = include_str!("../ui/dashboard.css");

/// GET /?search=&status=&studio=
///
/// Serves the roster page
pub async fn serve_dashboard(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> Result<Markup, RosterError> {
    let filters = query.to_filter_state()?;
    let snapshot = state.query.snapshot().await;
    let view_model = derive_view_model(&snapshot.artists(), &filters);

    Ok(dashboard::render(&DashboardPage {
        loading: snapshot.loading,
        error: snapshot.error.as_deref(),
        view_model: &view_model,
        filters: &filters,
    }))
}

/// GET /static/dashboard.css
pub async fn serve_dashboard_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css")],
        DASHBOARD_CSS,
    )
        .into_response()
}
