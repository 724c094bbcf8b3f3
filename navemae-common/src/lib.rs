//! # Nave-Mãe Common Library
//!
//! Shared code for the Nave-Mãe management services including:
//! - Artist model and collection normalization
//! - Filter state and view-model derivation for the artist roster
//! - Neutral display helpers
//! - Configuration loading

pub mod artist;
pub mod collection;
pub mod config;
pub mod display;
pub mod error;
pub mod view_model;

pub use artist::{Artist, ArtistId, StatusKind};
pub use collection::{normalize_collection, parse_artist, ArtistCollectionResult};
pub use error::{Error, Result};
pub use view_model::{derive_view_model, ArtistViewModel, FilterState, StatusFilter, StudioFilter};
