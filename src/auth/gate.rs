//! Bearer token gate for the HTTP transport
//!
//! Evaluated once per inbound request, before it reaches the MCP service.
//! Health-prefixed paths pass through unauthenticated; everything else must
//! carry `Authorization: Bearer <token>` with an exact token match.

use crate::config::AuthConfig;
use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Bearer token gate
///
/// Cheap to clone; holds the expected token and the exempt path prefix,
/// both read-only after startup.
#[derive(Debug, Clone)]
pub struct AuthGate {
    token: Arc<str>,
    health_prefix: Arc<str>,
}

impl AuthGate {
    /// Create a gate from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            token: config.token.as_str().into(),
            health_prefix: config.health_prefix.as_str().into(),
        }
    }

    /// Whether a request path bypasses authentication
    pub fn is_exempt(&self, path: &str) -> bool {
        path.starts_with(&*self.health_prefix)
    }

    /// Validate an `Authorization` header value
    ///
    /// Token comparison is plain equality on a static shared secret. Fine
    /// for a local demo; do not treat this as production authentication.
    pub fn check_header(&self, header_value: Option<&str>) -> Result<(), AuthRejection> {
        let value = header_value.ok_or(AuthRejection::Missing)?;
        let token = value.strip_prefix("Bearer ").ok_or(AuthRejection::Missing)?;

        if token == &*self.token {
            Ok(())
        } else {
            Err(AuthRejection::Mismatch)
        }
    }
}

/// Why a request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// Header absent or not a `Bearer ` credential
    Missing,
    /// Bearer token present but does not match the configured token
    Mismatch,
}

impl AuthRejection {
    /// The `detail` message returned to the client
    pub fn detail(&self) -> &'static str {
        match self {
            AuthRejection::Missing => "Invalid or missing authorization token",
            AuthRejection::Mismatch => "Invalid authorization token",
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": self.detail() })),
        )
            .into_response()
    }
}

/// Axum middleware enforcing the bearer token gate
///
/// A rejection is non-fatal for the listener: the 401 answers the single
/// request and the server keeps accepting connections.
pub async fn require_bearer(
    State(gate): State<AuthGate>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if gate.is_exempt(path) {
        return next.run(request).await;
    }

    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match gate.check_header(header_value) {
        Ok(()) => {
            info!("Authorization token is valid");
            next.run(request).await
        }
        Err(rejection) => {
            warn!(path = %path, detail = rejection.detail(), "Rejected request");
            rejection.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_gate() -> AuthGate {
        AuthGate::new(&AuthConfig {
            token: "expected-token".to_string(),
            health_prefix: "/health".to_string(),
        })
    }

    #[test]
    fn test_check_header_accepts_matching_token() {
        let gate = test_gate();
        gate.check_header(Some("Bearer expected-token"))
            .expect("matching token should pass");
    }

    #[test]
    fn test_check_header_rejects_missing_header() {
        let gate = test_gate();
        assert_eq!(gate.check_header(None), Err(AuthRejection::Missing));
    }

    #[test]
    fn test_check_header_rejects_non_bearer_scheme() {
        let gate = test_gate();
        assert_eq!(
            gate.check_header(Some("Basic dXNlcjpwYXNz")),
            Err(AuthRejection::Missing)
        );
    }

    #[test]
    fn test_check_header_rejects_wrong_token() {
        let gate = test_gate();
        assert_eq!(
            gate.check_header(Some("Bearer wrong-token")),
            Err(AuthRejection::Mismatch)
        );
    }

    #[test]
    fn test_check_header_is_exact_match() {
        // No prefix/suffix tolerance on the token itself
        let gate = test_gate();
        assert_eq!(
            gate.check_header(Some("Bearer expected-token ")),
            Err(AuthRejection::Mismatch)
        );
        assert_eq!(
            gate.check_header(Some("Bearer expected")),
            Err(AuthRejection::Mismatch)
        );
    }

    #[test]
    fn test_health_paths_exempt() {
        let gate = test_gate();
        assert!(gate.is_exempt("/health"));
        assert!(gate.is_exempt("/health/live"));
        assert!(gate.is_exempt("/healthcheck"));
        assert!(!gate.is_exempt("/"));
        assert!(!gate.is_exempt("/mcp"));
    }

    #[test]
    fn test_rejection_details() {
        assert_eq!(
            AuthRejection::Missing.detail(),
            "Invalid or missing authorization token"
        );
        assert_eq!(
            AuthRejection::Mismatch.detail(),
            "Invalid authorization token"
        );
    }
}
