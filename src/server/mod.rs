//! MCP server for the LinkedIn network.
//!
//! This module provides the MCP protocol server that exposes the network
//! query tools to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::NetworkMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until the client
/// disconnects. It communicates via stdin/stdout using the MCP protocol.
///
/// # Arguments
/// * `server` - The configured NetworkMcpServer instance
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: NetworkMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
