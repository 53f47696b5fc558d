//! Server handler integration tests

use rmcp::handler::server::ServerHandler;
use simple_mcp::config::AppConfig;
use simple_mcp::server::McpHandler;

#[test]
fn test_handler_get_info() {
    let config = AppConfig::default();
    let handler = McpHandler::new(&config);

    let info = handler.get_info();

    assert_eq!(info.server_info.name, "Simple MCP Server");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.is_some());
}

#[test]
fn test_handler_tool_count() {
    let config = AppConfig::default();
    let handler = McpHandler::new(&config);

    assert_eq!(handler.tool_count(), 3);
}

#[test]
fn test_handler_capabilities() {
    let config = AppConfig::default();
    let handler = McpHandler::new(&config);

    let info = handler.get_info();

    // Tools capability only; no prompts, resources, or completions
    let tools_cap = info.capabilities.tools.unwrap();
    assert_eq!(tools_cap.list_changed, Some(false));
    assert!(info.capabilities.prompts.is_none());
    assert!(info.capabilities.resources.is_none());
}

#[test]
fn test_handler_instructions() {
    let config = AppConfig::default();
    let handler = McpHandler::new(&config);

    let instructions = handler.get_info().instructions.unwrap();
    assert!(instructions.contains("MCP"));
}

#[test]
fn test_handler_custom_identity() {
    let mut config = AppConfig::default();
    config.server.name = "custom-simple-mcp".to_string();
    config.server.version = "1.0.0".to_string();

    let handler = McpHandler::new(&config);

    let info = handler.get_info();
    assert_eq!(info.server_info.name, "custom-simple-mcp");
    assert_eq!(info.server_info.version, "1.0.0");
}

#[test]
fn test_handler_instances_independent() {
    // Each construction yields its own registry, so an HTTP-bound handler
    // and a stdio-bound handler never share registration state
    let config = AppConfig::default();

    let http_bound = McpHandler::new(&config);
    let stdio_bound = McpHandler::new(&config);

    assert_eq!(http_bound.tool_count(), 3);
    assert_eq!(stdio_bound.tool_count(), 3);
    assert_eq!(
        http_bound.get_info().server_info.name,
        stdio_bound.get_info().server_info.name
    );
}
