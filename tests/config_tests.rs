//! Configuration loading integration tests

use serial_test::serial;
use simple_mcp::config::{TransportMode, load_config, load_config_from_str};
use std::io::Write;

#[test]
#[serial]
fn test_load_config_defaults() {
    let config = load_config(None).unwrap();

    assert_eq!(config.server.name, "Simple MCP Server");
    assert_eq!(config.server.transport, TransportMode::Combined);
    assert_eq!(config.http.host, "0.0.0.0");
    assert_eq!(config.http.port, 9876);
    assert_eq!(config.auth.token, "SIMPLE_MCP_SERVER");
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[server]
transport = "http"

[http]
host = "127.0.0.1"
port = 9000

[auth]
token = "file-token"
"#
    )
    .unwrap();

    let config = load_config(Some(file.path().to_str().unwrap())).unwrap();

    assert_eq!(config.server.transport, TransportMode::Http);
    assert_eq!(config.http.host, "127.0.0.1");
    assert_eq!(config.http.port, 9000);
    assert_eq!(config.auth.token, "file-token");
    // Unset sections keep their defaults
    assert_eq!(config.server.name, "Simple MCP Server");
}

#[test]
fn test_load_config_missing_explicit_file() {
    let result = load_config(Some("/nonexistent/simple-mcp.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[http]
port = 9000
"#
    )
    .unwrap();

    // SAFETY: no other thread touches the environment; the #[serial]
    // attribute keeps env-dependent tests from interleaving
    unsafe {
        std::env::set_var("SIMPLE_MCP_HTTP__PORT", "7777");
    }

    let config = load_config(Some(file.path().to_str().unwrap()));

    unsafe {
        std::env::remove_var("SIMPLE_MCP_HTTP__PORT");
    }

    assert_eq!(config.unwrap().http.port, 7777);
}

#[test]
fn test_invalid_toml_rejected() {
    let result = load_config_from_str("this is not toml [[[");
    assert!(result.is_err());
}

#[test]
fn test_validation_runs_on_file_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[auth]
token = ""
"#
    )
    .unwrap();

    let result = load_config(Some(file.path().to_str().unwrap()));
    assert!(result.is_err());
}
