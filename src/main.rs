//! LinkedIn Network MCP Server - Main entry point
//!
//! This is the main executable for the LinkedIn Network MCP Server, which
//! provides a Model Context Protocol (MCP) interface to a contact network
//! stored in Postgres.

use anyhow::Result;
use linkedin_network_mcp::config::redact_url;
use linkedin_network_mcp::{
    Config, ConnectionProvider, Dispatcher, MetricsTracker, NetworkMcpServer, PgConnector,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL from .env applies
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting LinkedIn Network MCP Server with database: {}",
        redact_url(&config.database_url)
    );

    let metrics = MetricsTracker::new();
    let connector = Arc::new(PgConnector::new(&config));
    let provider = Arc::new(ConnectionProvider::new(
        connector,
        config.query_timeout(),
        metrics.clone(),
    ));

    // A failed first connect is not fatal; calls reconnect lazily
    if let Err(e) = provider.warm_up().await {
        warn!("Database not reachable at startup, will retry on first call: {}", e);
    }

    let dispatcher = Arc::new(Dispatcher::new(&config, provider, metrics.clone()));
    let server = NetworkMcpServer::new(dispatcher, config.client_api_key.clone());

    info!("LinkedIn Network MCP Server initialized");
    info!(
        "Search cap: {}, ranking size: {}, query timeout: {}s",
        config.search_result_cap, config.stats_top_n, config.query_timeout_secs
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    linkedin_network_mcp::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("LinkedIn Network MCP Server shutdown complete");
    Ok(())
}
