//! Tools module
//!
//! Provides the framework for defining and executing MCP tools.

pub mod definitions;
pub mod executor;
pub mod registry;

pub use executor::{ToolContext, ToolExecutor, ToolInfo, ToolOutput};
pub use registry::{RegisteredTool, ToolRegistry};
