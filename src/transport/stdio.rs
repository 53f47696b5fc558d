//! Stdio transport
//!
//! Runs the MCP server over standard input/output. No authentication is
//! applied; the local caller owning our stdio streams is trusted.

use crate::server::McpHandler;
use rmcp::ServiceExt;
use rmcp::transport::io::stdio;
use tracing::info;

/// Run the MCP server using stdio transport
pub async fn run_stdio(handler: McpHandler) -> anyhow::Result<()> {
    info!("Starting MCP server with stdio transport");

    // Create the stdio transport
    let transport = stdio();

    // Run the server
    let server = handler.serve(transport).await?;

    // Wait for completion
    server.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
