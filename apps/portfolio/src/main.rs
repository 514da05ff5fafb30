mod config;
mod contact;
mod data;
mod errors;
mod models;
mod render;
mod routes;
mod sections;
mod state;
mod tracker;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::data::FsPortfolioStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    // Documents are read per request; a missing directory is only worth a warning here.
    if !config.data_dir.is_dir() {
        warn!(
            "Data directory {} does not exist; pages will fail until it does",
            config.data_dir.display()
        );
    }
    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} does not exist; images and downloads will 404",
            config.static_dir.display()
        );
    }
    let store = Arc::new(FsPortfolioStore::new(&config.data_dir));
    info!("Serving portfolio data from {}", store.base_dir().display());

    let state = AppState {
        config: config.clone(),
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
