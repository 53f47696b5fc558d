//! Configuration module
//!
//! Defines the application configuration structure and the layered loader.
//! The configuration is built once at startup and passed by reference into
//! the auth gate and transport runners; there is no process-wide mutable
//! state.

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::{
    AppConfig, AuthConfig, HttpServerConfig, LogFormat, LoggingConfig, ServerConfig, TransportMode,
};
