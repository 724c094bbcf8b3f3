//! Integration tests for the backend HTTP source
//!
//! Each test starts a throwaway backend on an ephemeral port.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use std::time::Duration;

use navemae_artists::source::{ArtistSource, HttpArtistSource, SourceError};
use navemae_common::{normalize_collection, ArtistCollectionResult};

/// Test helper: serve `router` and return its base URL
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn source(base_url: &str) -> HttpArtistSource {
    HttpArtistSource::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_bare_array() {
    let router = Router::new().route(
        "/artists",
        get(|| async {
            Json(json!([
                {"id": 1, "first_name": "Ana", "last_name": "Silva", "status": "active"}
            ]))
        }),
    );
    let base = spawn_backend(router).await;

    let result = source(&base).fetch_artists().await.unwrap();
    assert!(matches!(result, ArtistCollectionResult::Bare(_)));
    assert_eq!(normalize_collection(Some(&result))[0].full_name(), "Ana Silva");
}

#[tokio::test]
async fn test_fetch_wrapped_object_under_base_path() {
    let router = Router::new().route(
        "/api/artists",
        get(|| async {
            Json(json!({
                "artists": [
                    {"id": "x1", "first_name": "Bruno", "last_name": "Costa", "status": "inactive"}
                ],
                "count": 1
            }))
        }),
    );
    let base = spawn_backend(router).await;

    let result = source(&format!("{}/api/", base)).fetch_artists().await.unwrap();
    let artists = normalize_collection(Some(&result));
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].id.to_string(), "x1");
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let router = Router::new().route(
        "/artists",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base = spawn_backend(router).await;

    match source(&base).fetch_artists().await {
        Err(SourceError::Api(status, body)) => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("Expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let router = Router::new().route("/artists", get(|| async { "<html>oops</html>" }));
    let base = spawn_backend(router).await;

    assert!(matches!(
        source(&base).fetch_artists().await,
        Err(SourceError::Parse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = source(&format!("http://{}", addr)).fetch_artists().await;
    assert!(matches!(result, Err(SourceError::Network(_))));
}
