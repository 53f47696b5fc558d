//! Simple MCP Server
//!
//! A minimal demonstration MCP server with stdio and streamable HTTP
//! transports.

use clap::Parser;
use simple_mcp::{
    auth::AuthGate,
    config::{LogFormat, TransportMode, load_config},
    server::McpHandler,
    transport::{HttpConfig, run_http, run_http_blocking, run_stdio},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Simple MCP Server - demonstration tools over stdio and streamable HTTP
#[derive(Parser, Debug)]
#[command(name = "simple-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "SIMPLE_MCP_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SIMPLE_MCP_LOG_LEVEL")]
    log_level: Option<String>,

    /// Run the HTTP transport only
    #[arg(long, conflicts_with = "stdio_only")]
    http_only: bool,

    /// Run the stdio transport only
    #[arg(long, conflicts_with = "http_only")]
    stdio_only: bool,

    /// HTTP server host (for http transport)
    #[arg(long, env = "SIMPLE_MCP_HTTP_HOST")]
    http_host: Option<String>,

    /// HTTP server port (for http transport)
    #[arg(long, env = "SIMPLE_MCP_HTTP_PORT")]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration; logging is not up yet, so failures go to stderr
    // directly
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    // Initialize logging; stdout belongs to the stdio transport, so logs
    // go to stderr. Precedence: RUST_LOG, then --log-level, then config.
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match config.logging.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Simple MCP server"
    );

    // Determine the run mode
    let mode = TransportMode::select(args.http_only, args.stdio_only, config.server.transport);

    // CLI host/port flags override the config file
    let http_host = args
        .http_host
        .clone()
        .unwrap_or_else(|| config.http.host.clone());
    let http_port = args.http_port.unwrap_or(config.http.port);

    let config = Arc::new(config);

    match mode {
        TransportMode::Http => {
            let gate = AuthGate::new(&config.auth);
            let http_config = HttpConfig::from_host_port(&http_host, http_port)?;

            let factory_config = config.clone();
            run_http_blocking(move || McpHandler::new(&factory_config), gate, http_config).await?;
        }
        TransportMode::Stdio => {
            // The network port is never bound in this mode
            let handler = McpHandler::new(&config);
            run_stdio(handler).await?;
        }
        TransportMode::Combined => {
            info!("Starting Simple MCP server with BOTH transports");

            let gate = AuthGate::new(&config.auth);
            let http_config = HttpConfig::from_host_port(&http_host, http_port)?;

            // HTTP on a supervised background task
            let factory_config = config.clone();
            let ct = run_http(move || McpHandler::new(&factory_config), gate, http_config).await?;

            // Stdio on the main task governs process lifetime; stop the
            // HTTP listener once it ends
            let handler = McpHandler::new(&config);
            let result = run_stdio(handler).await;
            ct.cancel();
            result?;
        }
    }

    Ok(())
}
