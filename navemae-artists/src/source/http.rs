//! Backend HTTP client for the artist listing

use async_trait::async_trait;
use navemae_common::ArtistCollectionResult;
use std::time::Duration;

use super::{ArtistSource, SourceError};

const USER_AGENT: &str = concat!("navemae-artists/", env!("CARGO_PKG_VERSION"));
const ARTISTS_PATH: &str = "artists";

/// Fetches `GET <base_url>/artists` from the management backend
pub struct HttpArtistSource {
    http_client: reqwest::Client,
    artists_url: String,
}

impl HttpArtistSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            artists_url: format!("{}/{}", base_url.trim_end_matches('/'), ARTISTS_PATH),
        })
    }

    pub fn artists_url(&self) -> &str {
        &self.artists_url
    }
}

#[async_trait]
impl ArtistSource for HttpArtistSource {
    fn source_id(&self) -> &'static str {
        "http"
    }

    async fn fetch_artists(&self) -> Result<ArtistCollectionResult, SourceError> {
        tracing::debug!(url = %self.artists_url, "Requesting artist listing");

        let response = self
            .http_client
            .get(&self.artists_url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SourceError::Api(status.as_u16(), error_text));
        }

        response
            .json::<ArtistCollectionResult>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artists_url_joins_without_double_slash() {
        let source = HttpArtistSource::new("http://localhost:3000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(source.artists_url(), "http://localhost:3000/api/artists");

        let source = HttpArtistSource::new("http://localhost:3000", Duration::from_secs(5)).unwrap();
        assert_eq!(source.artists_url(), "http://localhost:3000/artists");
    }
}
