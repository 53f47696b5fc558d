//! Tool execution framework
//!
//! Defines the traits and types a tool implementation interacts with:
//! typed execution, static metadata, per-request context, and the output
//! shape converted to MCP content at the handler boundary.

use crate::error::ToolError;
use async_trait::async_trait;
use serde::Serialize;

/// Static metadata for a tool
///
/// Implemented alongside [`ToolExecutor`] so a tool can be registered with
/// a plain `ToolRegistry::register::<T>()` call.
pub trait ToolInfo {
    /// Tool name as exposed over MCP
    fn name() -> &'static str;

    /// Human-readable tool description
    fn description() -> &'static str;
}

/// Context passed to every tool invocation
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Request identifier for tracing
    pub request_id: String,
}

impl ToolContext {
    /// Create a context for a single request
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// Result of a tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Rendered text blocks returned to the client
    pub content: Vec<String>,
    /// Whether this output represents a tool-level error
    pub is_error: bool,
}

impl ToolOutput {
    /// Successful output with a single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![text.into()],
            is_error: false,
        }
    }

    /// Successful output rendering a serializable value as JSON
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ToolError> {
        Ok(Self::text(serde_json::to_string_pretty(value)?))
    }

    /// Error output with a single text block
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![message.into()],
            is_error: true,
        }
    }
}

/// A tool that can be executed with typed arguments
///
/// Arguments arrive already deserialized into the implementing struct;
/// schema validation happens at the registry boundary, not in tool code.
#[async_trait]
pub trait ToolExecutor {
    /// Execute the tool
    async fn execute(&self, ctx: &ToolContext) -> Result<ToolOutput, ToolError>;
}
