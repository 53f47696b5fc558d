//! Greeting tool

use crate::error::ToolError;
use crate::tools::ToolRegistry;
use crate::tools::executor::{ToolContext, ToolExecutor, ToolInfo, ToolOutput};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::info;

/// Return a greeting for a name, optionally after a delay
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(default)]
pub struct HelloWorld {
    /// Name to greet
    pub name: String,
    /// Optional delay in seconds before responding
    pub delay: u64,
}

impl Default for HelloWorld {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
            delay: 0,
        }
    }
}

impl ToolInfo for HelloWorld {
    fn name() -> &'static str {
        "hello_world"
    }

    fn description() -> &'static str {
        "A simple hello world tool that returns a greeting"
    }
}

#[async_trait]
impl ToolExecutor for HelloWorld {
    async fn execute(&self, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        info!(
            request_id = %ctx.request_id,
            name = %self.name,
            delay = self.delay,
            "hello_world called"
        );

        // Cooperative suspension: other requests on the HTTP transport keep
        // being served while this one waits.
        if self.delay > 0 {
            tokio::time::sleep(Duration::from_secs(self.delay)).await;
        }

        ToolOutput::json(&json!({ "message": format!("Hello, {}!", self.name) }))
    }
}

/// Register the greeting tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register::<HelloWorld>();
}
