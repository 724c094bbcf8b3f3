//! Offline artist sources: a JSON file on disk, or an in-memory listing

use async_trait::async_trait;
use navemae_common::ArtistCollectionResult;
use std::path::PathBuf;

use super::{ArtistSource, SourceError};

/// Reads the listing from a JSON file (either response shape)
pub struct FileArtistSource {
    path: PathBuf,
}

impl FileArtistSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArtistSource for FileArtistSource {
    fn source_id(&self) -> &'static str {
        "file"
    }

    async fn fetch_artists(&self) -> Result<ArtistCollectionResult, SourceError> {
        tracing::debug!(path = %self.path.display(), "Reading artist listing");
        let bytes = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// Resolves a fixed listing; used when no backend is configured
pub struct StaticArtistSource {
    result: ArtistCollectionResult,
}

impl StaticArtistSource {
    pub fn new(result: ArtistCollectionResult) -> Self {
        Self { result }
    }

    /// A source resolving to an empty bare listing
    pub fn empty() -> Self {
        Self::new(ArtistCollectionResult::Bare(Vec::new()))
    }
}

#[async_trait]
impl ArtistSource for StaticArtistSource {
    fn source_id(&self) -> &'static str {
        "static"
    }

    async fn fetch_artists(&self) -> Result<ArtistCollectionResult, SourceError> {
        Ok(self.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navemae_common::normalize_collection;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_wrapped_shape() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"artists": [{{"id": 1, "first_name": "Ana", "last_name": "Silva"}}]}}"#
        )
        .unwrap();

        let source = FileArtistSource::new(file.path());
        let result = source.fetch_artists().await.unwrap();
        let artists = normalize_collection(Some(&result));
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].full_name(), "Ana Silva");
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = FileArtistSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.fetch_artists().await, Err(SourceError::Io(_))));
    }

    #[tokio::test]
    async fn test_file_source_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = FileArtistSource::new(file.path());
        assert!(matches!(source.fetch_artists().await, Err(SourceError::Parse(_))));
    }

    #[tokio::test]
    async fn test_static_empty_source() {
        let result = StaticArtistSource::empty().fetch_artists().await.unwrap();
        assert!(normalize_collection(Some(&result)).is_empty());
    }
}
