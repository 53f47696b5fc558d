//! Streamable HTTP transport
//!
//! Runs the MCP server over a long-lived streaming HTTP listener. The
//! bearer token gate wraps every route except the health endpoint.

use crate::auth::{AuthGate, require_bearer};
use crate::error::TransportError;
use crate::server::McpHandler;
use axum::{Json, Router, middleware, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Default port for the streamable HTTP transport
pub const DEFAULT_HTTP_PORT: u16 = 9876;

/// Path of the unauthenticated health endpoint
pub const HEALTH_PATH: &str = "/health";

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Address to bind to (e.g., "0.0.0.0:9876")
    pub bind: SocketAddr,
    /// Keep-alive interval for SSE streams
    pub sse_keep_alive: Option<Duration>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], DEFAULT_HTTP_PORT)),
            sse_keep_alive: Some(Duration::from_secs(15)),
        }
    }
}

impl HttpConfig {
    /// Create a new HTTP config with the specified bind address
    pub fn new(bind: SocketAddr) -> Self {
        Self {
            bind,
            ..Default::default()
        }
    }

    /// Create config from host and port strings
    pub fn from_host_port(host: &str, port: u16) -> Result<Self, std::net::AddrParseError> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        Ok(Self::new(addr))
    }
}

/// Build the HTTP router: health route, auth gate, MCP service at `/`
///
/// The MCP endpoint lives at the root, so the streamable HTTP service is
/// mounted as the fallback; `/health` is the only explicit route. Exposed
/// separately from [`run_http`] so tests can drive the real router without
/// binding a socket.
pub fn build_router<F>(handler_factory: F, gate: AuthGate, config: &HttpConfig) -> Router
where
    F: Fn() -> McpHandler + Send + Sync + 'static,
{
    let mcp_service = StreamableHttpService::new(
        move || Ok(handler_factory()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            sse_keep_alive: config.sse_keep_alive,
            stateful_mode: true,
            ..Default::default()
        },
    );

    Router::new()
        .route(HEALTH_PATH, get(health))
        .fallback_service(mcp_service)
        .layer(middleware::from_fn_with_state(gate, require_bearer))
        .layer(TraceLayer::new_for_http())
}

/// Health endpoint handler
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Run the MCP server using the streamable HTTP transport
///
/// Binds the configured address and serves on a background task. The
/// factory yields a fresh handler per session, so concurrent connections
/// never share in-flight request state.
///
/// # Returns
/// A cancellation token that stops the listener when cancelled.
pub async fn run_http<F>(
    handler_factory: F,
    gate: AuthGate,
    config: HttpConfig,
) -> anyhow::Result<CancellationToken>
where
    F: Fn() -> McpHandler + Send + Sync + 'static,
{
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(TransportError::Io)?;
    let addr = listener.local_addr().map_err(TransportError::Io)?;

    info!(
        "Starting MCP server with streamable HTTP transport on http://{}",
        addr
    );
    info!("  MCP endpoint: /");
    info!("  Health endpoint: {}", HEALTH_PATH);

    let app = build_router(handler_factory, gate, &config);

    let ct = CancellationToken::new();
    let shutdown = ct.clone();

    tokio::spawn(async move {
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await });

        if let Err(e) = serve.await {
            error!(error = %e, "HTTP server error");
        }
    });

    Ok(ct)
}

/// Run the MCP server using the streamable HTTP transport and wait for shutdown
///
/// This is a convenience function that starts the server and waits
/// for a shutdown signal (Ctrl+C).
pub async fn run_http_blocking<F>(
    handler_factory: F,
    gate: AuthGate,
    config: HttpConfig,
) -> anyhow::Result<()>
where
    F: Fn() -> McpHandler + Send + Sync + 'static,
{
    let ct = run_http(handler_factory, gate, config).await?;

    info!("Press Ctrl+C to stop the server");

    // Wait for shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        _ = ct.cancelled() => {
            info!("Server cancelled");
        }
    }

    ct.cancel();

    info!("HTTP server stopped");
    Ok(())
}
