//! Artist roster view-model
//!
//! Derives what the roster page displays from the full artist collection and
//! the current filter inputs. Pure and total: any collection (including an
//! empty one) and any filter state produce a view-model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::artist::{Artist, STATUS_ACTIVE, STATUS_INACTIVE};
use crate::error::Error;

/// Featured-artist count shown on the metrics card
///
/// Artists carry no "featured" attribute, so this is a fixed placeholder.
pub const FEATURED_COUNT_PLACEHOLDER: usize = 0;

/// Average performance shown on the metrics card
///
/// Fixed placeholder; no performance data exists to compute it from.
pub const AVERAGE_PERFORMANCE_PLACEHOLDER: f64 = 8.7;

/// Status selector of the roster filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => STATUS_ACTIVE,
            StatusFilter::Inactive => STATUS_INACTIVE,
        }
    }

    /// Whether `artist` passes this selector (exact status string match)
    pub fn matches(&self, artist: &Artist) -> bool {
        match self {
            StatusFilter::All => true,
            other => artist.has_status(other.as_str()),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(StatusFilter::All),
            STATUS_ACTIVE => Ok(StatusFilter::Active),
            STATUS_INACTIVE => Ok(StatusFilter::Inactive),
            other => Err(Error::InvalidInput(format!(
                "Unknown status filter '{}' (expected all, active or inactive)",
                other
            ))),
        }
    }
}

/// Studio selector of the roster filters
///
/// Accepted and echoed back to the page, but not applied when filtering:
/// artists carry no studio attribute to match against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StudioFilter {
    #[default]
    All,
    Studio(String),
}

impl StudioFilter {
    pub fn as_str(&self) -> &str {
        match self {
            StudioFilter::All => "all",
            StudioFilter::Studio(id) => id,
        }
    }
}

impl fmt::Display for StudioFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudioFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(StudioFilter::All),
            id => Ok(StudioFilter::Studio(id.to_string())),
        }
    }
}

impl Serialize for StudioFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Live filter inputs of the roster page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    /// Free text, matched case-insensitively against name and email
    pub search_term: String,
    pub status_filter: StatusFilter,
    /// No-op: see [`StudioFilter`]
    pub studio_filter: StudioFilter,
}

impl FilterState {
    /// True when the filters can exclude artists (drives the empty-state copy)
    ///
    /// The studio selector is not considered since it never excludes anyone.
    pub fn is_narrowing(&self) -> bool {
        !self.search_term.is_empty() || self.status_filter != StatusFilter::All
    }

    fn matches(&self, artist: &Artist, needle: &str) -> bool {
        matches_search(artist, needle) && self.status_filter.matches(artist)
        // studio_filter intentionally not applied
    }
}

/// Why the roster grid is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Nothing to filter: the network has no artists
    NoArtists,
    /// Artists exist but the filters excluded all of them
    NoMatches,
}

/// Display state derived from the roster and its filters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistViewModel {
    /// Artists passing the filters, in collection order
    pub filtered: Vec<Artist>,
    /// Counts below cover the full, unfiltered collection
    pub total_count: usize,
    pub active_count: usize,
    pub inactive_count: usize,
    /// Always [`FEATURED_COUNT_PLACEHOLDER`]
    pub featured_count: usize,
}

impl ArtistViewModel {
    /// Classify an empty grid, or `None` when there is something to show
    pub fn empty_state(&self, filters: &FilterState) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            None
        } else if filters.is_narrowing() {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::NoArtists)
        }
    }
}

/// Derive the roster view-model
pub fn derive_view_model(artists: &[Artist], filters: &FilterState) -> ArtistViewModel {
    let needle = filters.search_term.to_lowercase();

    let filtered = artists
        .iter()
        .filter(|artist| filters.matches(artist, &needle))
        .cloned()
        .collect();

    ArtistViewModel {
        filtered,
        total_count: artists.len(),
        active_count: artists.iter().filter(|a| a.has_status(STATUS_ACTIVE)).count(),
        inactive_count: artists.iter().filter(|a| a.has_status(STATUS_INACTIVE)).count(),
        featured_count: FEATURED_COUNT_PLACEHOLDER,
    }
}

/// Case-insensitive substring match on "<first> <last>" or email
///
/// `needle` must already be lowercased.
fn matches_search(artist: &Artist, needle: &str) -> bool {
    if artist.full_name().to_lowercase().contains(needle) {
        return true;
    }
    artist
        .email
        .as_deref()
        .map(|email| email.to_lowercase().contains(needle))
        .unwrap_or(false)
}
