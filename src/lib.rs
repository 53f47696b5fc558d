//! Simple MCP Server
//!
//! A minimal demonstration MCP server exposing a small set of tools over
//! two transports.
//!
//! ## Features
//!
//! - **Three demo tools** - `hello_world`, `get_version`, `system_info`
//! - **Dual transports** - stdio for local clients, streamable HTTP for
//!   network clients, individually selectable or combined in one process
//! - **Bearer token gate** - HTTP requests require `Authorization: Bearer`
//!   except on the health endpoint; stdio is unauthenticated
//! - **Layered configuration** - TOML files and `SIMPLE_MCP_*` environment
//!   variables over built-in defaults
//!
//! ## Run modes
//!
//! ```text
//! --http-only   HTTP listener on the calling task, stdio never starts
//! --stdio-only  stdio on the calling task, the port is never bound
//! (default)     HTTP on a supervised background task + stdio on the main task
//! ```
//!
//! ## Example Configuration
//!
//! ```toml
//! [http]
//! host = "0.0.0.0"
//! port = 9876
//!
//! [auth]
//! token = "SIMPLE_MCP_SERVER"
//! health_prefix = "/health"
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod server;
pub mod tools;
pub mod transport;

// Re-export main types
pub use auth::AuthGate;
pub use config::{AppConfig, load_config};
pub use error::{AppError, Result};
pub use server::McpHandler;
