//! Server module
//!
//! Implements the MCP protocol handler bound to both transports.

pub mod handler;

pub use handler::McpHandler;
