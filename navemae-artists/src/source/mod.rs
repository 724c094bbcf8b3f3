//! Artist data sources
//!
//! A data source resolves the raw artist listing exactly as the upstream
//! returns it. Shape normalization happens later, in the view-model layer.

use async_trait::async_trait;
use navemae_common::config::TomlConfig;
use navemae_common::ArtistCollectionResult;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub mod file;
pub mod http;

pub use file::{FileArtistSource, StaticArtistSource};
pub use http::HttpArtistSource;

/// Data source errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of the artist listing
#[async_trait]
pub trait ArtistSource: Send + Sync {
    /// Source identifier for logs (e.g., "http", "file")
    fn source_id(&self) -> &'static str;

    /// Fetch the artist listing
    ///
    /// # Returns
    /// * `Ok(ArtistCollectionResult)` - Listing in whatever shape upstream used
    /// * `Err(SourceError)` - Transport, status or decoding failure
    async fn fetch_artists(&self) -> Result<ArtistCollectionResult, SourceError>;
}

/// Pick the data source named by the configuration
///
/// A backend URL wins over a fixture file. With neither, the roster is served
/// empty.
pub fn from_config(config: &TomlConfig) -> Result<Arc<dyn ArtistSource>, SourceError> {
    if let Some(url) = config.backend_url.as_deref() {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        return Ok(Arc::new(HttpArtistSource::new(url, timeout)?));
    }

    if let Some(path) = config.fixture_path.as_deref() {
        return Ok(Arc::new(FileArtistSource::new(path)));
    }

    tracing::warn!("No backend_url or fixture_path configured, serving an empty roster");
    Ok(Arc::new(StaticArtistSource::empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_prefers_backend_url() {
        let config = TomlConfig {
            backend_url: Some("http://localhost:3000".to_string()),
            fixture_path: Some("/tmp/artists.json".into()),
            ..TomlConfig::default()
        };
        assert_eq!(from_config(&config).unwrap().source_id(), "http");
    }

    #[test]
    fn test_from_config_uses_fixture_then_empty() {
        let config = TomlConfig {
            fixture_path: Some("/tmp/artists.json".into()),
            ..TomlConfig::default()
        };
        assert_eq!(from_config(&config).unwrap().source_id(), "file");
        assert_eq!(from_config(&TomlConfig::default()).unwrap().source_id(), "static");
    }
}
