//! navemae-artists - Artist roster service
//!
//! Fetches the studio network's artists once from the backend and serves the
//! roster page with metric cards, search and status filters.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use navemae_artists::query::ArtistQuery;
use navemae_artists::{build_router, source, AppState};
use navemae_common::config::{self, LoggingConfig, TomlConfig};

/// Command-line arguments; each overrides the config file
#[derive(Debug, Parser)]
#[command(name = "navemae-artists", version, about = "Nave-Mãe artist roster")]
struct Args {
    /// Path to TOML config file
    #[arg(long, env = "NAVEMAE_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the management backend
    #[arg(long, env = "NAVEMAE_BACKEND_URL")]
    backend_url: Option<String>,

    /// Serve artists from a JSON file instead of the backend
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(self, mut config: TomlConfig) -> TomlConfig {
        if let Some(url) = self.backend_url {
            config.backend_url = Some(url);
        }
        if let Some(path) = self.fixture {
            config.fixture_path = Some(path);
        }
        if let Some(bind) = self.bind {
            config.bind_address = bind;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        config
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid log level")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => builder.init(),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Tracing is not up yet; config errors surface through anyhow and the
    // origin is logged after init
    let loaded = config::load_or_default(args.config.as_deref())?;
    let config = args.apply(loaded.config.clone());

    init_tracing(&config.logging)?;

    // Log build identification immediately after tracing init
    info!(
        "Starting Nave-Mãe Artist Roster (navemae-artists) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    loaded.log_origin();

    let source = source::from_config(&config).context("Failed to create artist source")?;
    let query = Arc::new(ArtistQuery::new(source));
    let fetch = query.spawn();

    let app = build_router(AppState::new(query));

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("navemae-artists listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // No-op when the fetch already settled
    fetch.abort();

    Ok(())
}
