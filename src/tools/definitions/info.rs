//! Version and host information tools

use crate::error::ToolError;
use crate::tools::ToolRegistry;
use crate::tools::executor::{ToolContext, ToolExecutor, ToolInfo, ToolOutput};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Server name reported by `get_version`
pub const SERVER_NAME: &str = "Simple MCP Server";

/// Protocol framework and version reported by `get_version`
pub const API_VERSION: &str = "rmcp 0.11";

/// Get server version information
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetVersion {}

impl ToolInfo for GetVersion {
    fn name() -> &'static str {
        "get_version"
    }

    fn description() -> &'static str {
        "Get server version information"
    }
}

#[async_trait]
impl ToolExecutor for GetVersion {
    async fn execute(&self, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        info!(request_id = %ctx.request_id, "get_version called");

        ToolOutput::json(&json!({
            "version": env!("CARGO_PKG_VERSION"),
            "name": SERVER_NAME,
            "api_version": API_VERSION,
        }))
    }
}

/// Get basic host system information
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SystemInfo {}

impl ToolInfo for SystemInfo {
    fn name() -> &'static str {
        "system_info"
    }

    fn description() -> &'static str {
        "Get basic system information"
    }
}

#[async_trait]
impl ToolExecutor for SystemInfo {
    async fn execute(&self, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        info!(request_id = %ctx.request_id, "system_info called");

        // Host-dependent, caller-independent
        ToolOutput::json(&json!({
            "system": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
            "platform": format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
        }))
    }
}

/// Register the info tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register::<GetVersion>();
    registry.register::<SystemInfo>();
}
