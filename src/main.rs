// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::page_service::PageService;
use crate::application::shaper::TimeSeriesShaper;
use crate::infrastructure::config::load_config;
use crate::infrastructure::http_repository::HttpStatsRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpStatsRepository::new(config.source.base_url.clone()));

    // Create services (application layer)
    let shaper = TimeSeriesShaper::new(config.charts.date_policy);
    let page_service = PageService::new(repository, shaper);

    let state = Arc::new(AppState {
        page_service,
        shaper,
    });

    // Build router (presentation layer)
    // Bodies are compressed by our own response builder, so no CompressionLayer here
    let router = router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server.bind_address.parse()?;
    tracing::info!(
        "Starting ppastats-charts on {} (summaries from {}, {:?} dates)",
        addr,
        config.source.base_url,
        config.charts.date_policy
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
