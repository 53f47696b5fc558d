//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (SIMPLE_MCP_*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "simple-mcp.toml",
    ".simple-mcp.toml",
    "~/.config/simple-mcp/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Start with defaults (handled by serde defaults on AppConfig)

    // 2. Add configuration file
    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // 3. Add environment variables with SIMPLE_MCP_ prefix
    // e.g., SIMPLE_MCP_HTTP__PORT, SIMPLE_MCP_AUTH__TOKEN
    // Double underscore (__) maps to nested keys (http.port)
    builder = builder.add_source(
        Environment::with_prefix("SIMPLE_MCP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // Build and deserialize
    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.name.is_empty() {
        return Err(ConfigError::Missing {
            field: "server.name".to_string(),
        });
    }

    if config.http.port == 0 {
        return Err(ConfigError::Invalid {
            message: "http.port must be greater than 0".to_string(),
        });
    }

    if config.auth.token.is_empty() {
        return Err(ConfigError::Missing {
            field: "auth.token".to_string(),
        });
    }

    if !config.auth.health_prefix.starts_with('/') {
        return Err(ConfigError::Invalid {
            message: format!(
                "auth.health_prefix must start with '/', got: {}",
                config.auth.health_prefix
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransportMode;

    #[test]
    fn test_load_config_from_str_basic() {
        let toml = r#"
[server]
name = "test-server"
transport = "stdio"

[http]
host = "127.0.0.1"
port = 9999
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.name, "test-server");
        assert_eq!(config.server.transport, TransportMode::Stdio);
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9999);
        // Untouched sections keep their defaults
        assert_eq!(config.auth.token, "SIMPLE_MCP_SERVER");
    }

    #[test]
    fn test_load_config_from_str_auth_override() {
        let toml = r#"
[auth]
token = "local-secret"
health_prefix = "/healthz"
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.auth.token, "local-secret");
        assert_eq!(config.auth.health_prefix, "/healthz");
    }

    #[test]
    fn test_empty_token_error() {
        let toml = r#"
[auth]
token = ""
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_zero_port_error() {
        let toml = r#"
[http]
port = 0
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_health_prefix_must_be_absolute() {
        let toml = r#"
[auth]
health_prefix = "health"
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let toml = r#"
[server]
transport = "carrier-pigeon"
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
