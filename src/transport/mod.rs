//! Transport module
//!
//! Provides the two transport runners for the MCP server: streamable HTTP
//! (behind the auth gate) and stdio.

pub mod http;
pub mod stdio;

pub use http::{DEFAULT_HTTP_PORT, HttpConfig, build_router, run_http, run_http_blocking};
pub use stdio::run_stdio;
