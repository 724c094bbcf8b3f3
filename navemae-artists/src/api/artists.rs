//! Artist roster endpoint
//!
//! Filters are applied on every request against the already-resolved
//! listing; requests never trigger a new fetch.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use navemae_common::view_model::AVERAGE_PERFORMANCE_PLACEHOLDER;
use navemae_common::{
    derive_view_model, Artist, ArtistViewModel, FilterState, StatusFilter, StudioFilter,
};

use crate::AppState;

/// Filter query parameters shared by the API and the dashboard page
#[derive(Debug, Default, Deserialize)]
pub struct RosterQuery {
    /// Free-text search over name and email
    #[serde(default)]
    pub search: String,
    /// `all`, `active` or `inactive`
    #[serde(default)]
    pub status: String,
    /// `all` or a studio id (accepted, not applied)
    #[serde(default)]
    pub studio: String,
}

impl RosterQuery {
    pub fn to_filter_state(&self) -> Result<FilterState, RosterError> {
        let status_filter = self
            .status
            .parse::<StatusFilter>()
            .map_err(|e| RosterError::InvalidFilter(e.to_string()))?;
        let studio_filter = self
            .studio
            .parse::<StudioFilter>()
            .map_err(|e| RosterError::InvalidFilter(e.to_string()))?;

        Ok(FilterState {
            search_term: self.search.clone(),
            status_filter,
            studio_filter,
        })
    }
}

/// Metric card values
#[derive(Debug, Serialize)]
pub struct RosterMetrics {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Placeholder, always 0
    pub featured: usize,
    /// Placeholder, always 8.7
    pub average_performance: f64,
}

impl From<&ArtistViewModel> for RosterMetrics {
    fn from(vm: &ArtistViewModel) -> Self {
        Self {
            total: vm.total_count,
            active: vm.active_count,
            inactive: vm.inactive_count,
            featured: vm.featured_count,
            average_performance: AVERAGE_PERFORMANCE_PLACEHOLDER,
        }
    }
}

/// Roster response
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub loading: bool,
    pub error: Option<String>,
    pub filters: FilterState,
    pub metrics: RosterMetrics,
    pub artists: Vec<Artist>,
}

/// GET /api/artists?search=&status=&studio=
pub async fn get_artists(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<RosterResponse>, RosterError> {
    let filters = query.to_filter_state()?;

    let snapshot = state.query.snapshot().await;
    let vm = derive_view_model(&snapshot.artists(), &filters);

    tracing::debug!(
        search = %filters.search_term,
        status = %filters.status_filter,
        shown = vm.filtered.len(),
        total = vm.total_count,
        "Roster filtered"
    );

    Ok(Json(RosterResponse {
        loading: snapshot.loading,
        error: snapshot.error,
        metrics: RosterMetrics::from(&vm),
        filters,
        artists: vm.filtered,
    }))
}

/// Roster errors
#[derive(Debug)]
pub enum RosterError {
    InvalidFilter(String),
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RosterError::InvalidFilter(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default_filters() {
        let filters = RosterQuery::default().to_filter_state().unwrap();
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_query_maps_to_filter_state() {
        let query = RosterQuery {
            search: "Ana".to_string(),
            status: "active".to_string(),
            studio: "studio1".to_string(),
        };
        let filters = query.to_filter_state().unwrap();
        assert_eq!(filters.search_term, "Ana");
        assert_eq!(filters.status_filter, StatusFilter::Active);
        assert_eq!(filters.studio_filter, StudioFilter::Studio("studio1".to_string()));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let query = RosterQuery {
            status: "banned".to_string(),
            ..RosterQuery::default()
        };
        assert!(matches!(query.to_filter_state(), Err(RosterError::InvalidFilter(_))));
    }
}
