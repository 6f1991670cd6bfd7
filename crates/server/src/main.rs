//! sieve server entry point.
//!
//! Boots the HTTP server exposing the filtered responses endpoint.
//! Logging goes to stderr as JSON lines.

use std::sync::Arc;

use anyhow::Result;
use sieve_client::{FormsClient, FormsConfig};
use sieve_core::AppConfig;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod params;
mod routes;
mod service;

#[cfg(test)]
mod testing;

use handler::AppState;
use service::ResponseService;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let client = FormsClient::new(FormsConfig::from_app_config(&config)?)?;
    let service = ResponseService::new(Arc::new(client), config.cache_capacity);
    let state = AppState::new(service);
    let app = handler::router(state.clone());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, cache_capacity = config.cache_capacity, "Starting sieve server");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!(cached_datasets = state.service.cache().len().await, "sieve server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("shutdown signal received");
}
