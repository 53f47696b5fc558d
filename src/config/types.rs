//! Configuration types for simple-mcp
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server identity and transport settings
    pub server: ServerConfig,

    /// HTTP listener settings
    pub http: HttpServerConfig,

    /// Bearer token authentication settings
    pub auth: AuthConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            http: HttpServerConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Server identity and transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Transport mode when no CLI flag is given
    pub transport: TransportMode,

    /// Server name for MCP
    pub name: String,

    /// Server version for MCP
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportMode::Combined,
            name: "Simple MCP Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Transport mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Standard input/output only
    Stdio,
    /// Streamable HTTP only
    Http,
    /// Both transports in the same process (default)
    #[default]
    Combined,
}

impl TransportMode {
    /// Resolve the run mode from the CLI flags, falling back to the
    /// configured mode when neither flag is set.
    ///
    /// The flags are mutually exclusive; clap enforces that before this
    /// function is reached.
    pub fn select(http_only: bool, stdio_only: bool, configured: TransportMode) -> TransportMode {
        match (http_only, stdio_only) {
            (true, _) => TransportMode::Http,
            (_, true) => TransportMode::Stdio,
            (false, false) => configured,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Host to bind the streamable HTTP listener to
    pub host: String,

    /// Port to bind the streamable HTTP listener to
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9876,
        }
    }
}

/// Bearer token authentication configuration
///
/// The token is a single static shared secret compared with plain equality.
/// Suitable for local demos only; this is not production-grade auth.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token expected on HTTP requests
    pub token: String,

    /// Request paths starting with this prefix bypass authentication
    pub health_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: "SIMPLE_MCP_SERVER".to_string(),
            health_prefix: "/health".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.name, "Simple MCP Server");
        assert_eq!(config.server.transport, TransportMode::Combined);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 9876);
        assert_eq!(config.auth.token, "SIMPLE_MCP_SERVER");
        assert_eq!(config.auth.health_prefix, "/health");
    }

    #[test]
    fn test_deserialize_transport_mode() {
        let mode: TransportMode = serde_json::from_str(r#""stdio""#).unwrap();
        assert_eq!(mode, TransportMode::Stdio);

        let mode: TransportMode = serde_json::from_str(r#""http""#).unwrap();
        assert_eq!(mode, TransportMode::Http);

        let mode: TransportMode = serde_json::from_str(r#""combined""#).unwrap();
        assert_eq!(mode, TransportMode::Combined);
    }

    #[test]
    fn test_transport_mode_select_flags() {
        let configured = TransportMode::Combined;
        assert_eq!(
            TransportMode::select(true, false, configured),
            TransportMode::Http
        );
        assert_eq!(
            TransportMode::select(false, true, configured),
            TransportMode::Stdio
        );
        assert_eq!(
            TransportMode::select(false, false, configured),
            TransportMode::Combined
        );
    }

    #[test]
    fn test_transport_mode_select_falls_back_to_config() {
        assert_eq!(
            TransportMode::select(false, false, TransportMode::Stdio),
            TransportMode::Stdio
        );
        assert_eq!(
            TransportMode::select(false, false, TransportMode::Http),
            TransportMode::Http
        );
    }
}
