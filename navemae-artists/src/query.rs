//! Artist query state
//!
//! Wraps a data source with a loading flag and the last resolved listing.
//! The fetch runs exactly once per service lifetime: no retry, no refetch.
//! Changing filters never goes back to the source.
//!
//! Failures are recorded in `error` and clear `loading`; the listing stays
//! absent, so the roster derives as empty.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use navemae_common::{normalize_collection, Artist, ArtistCollectionResult};

use crate::source::ArtistSource;

/// Point-in-time view of the query
#[derive(Debug, Clone, Serialize)]
pub struct QuerySnapshot {
    /// True until the fetch settles
    pub loading: bool,
    /// Raw listing as resolved; `None` until settled or on failure
    pub data: Option<ArtistCollectionResult>,
    /// Failure message, if the fetch failed
    pub error: Option<String>,
}

impl QuerySnapshot {
    fn pending() -> Self {
        Self {
            loading: true,
            data: None,
            error: None,
        }
    }

    /// Normalized roster; empty while loading or after a failure
    pub fn artists(&self) -> Vec<Artist> {
        normalize_collection(self.data.as_ref())
    }
}

/// Single-shot query over an [`ArtistSource`]
pub struct ArtistQuery {
    source: Arc<dyn ArtistSource>,
    state: RwLock<QuerySnapshot>,
    started: AtomicBool,
}

impl ArtistQuery {
    pub fn new(source: Arc<dyn ArtistSource>) -> Self {
        Self {
            source,
            state: RwLock::new(QuerySnapshot::pending()),
            started: AtomicBool::new(false),
        }
    }

    /// Run the fetch if it has not been started yet
    ///
    /// Returns `false` without touching the source when a previous call
    /// already started it.
    pub async fn run(&self) -> bool {
        if self.started.swap(true, Ordering::AcqRel) {
            debug!("Artist query already started, ignoring");
            return false;
        }

        info!("Fetching artists from {} source", self.source.source_id());
        let result = self.source.fetch_artists().await;

        let mut state = self.state.write().await;
        match result {
            Ok(data) => {
                info!("✓ Artist listing resolved");
                state.data = Some(data);
            }
            Err(e) => {
                error!("Failed to fetch artists: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
        true
    }

    /// Start the fetch on the runtime
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<bool> {
        let query = Arc::clone(self);
        tokio::spawn(async move { query.run().await })
    }

    pub async fn snapshot(&self) -> QuerySnapshot {
        self.state.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Whether the fetch settled with an error
    pub async fn has_failed(&self) -> bool {
        self.state.read().await.error.is_some()
    }
}
