//! Authentication module
//!
//! Provides the bearer token gate applied to the HTTP transport. The stdio
//! transport is not authenticated (trusted local caller).

pub mod gate;

pub use gate::{AuthGate, AuthRejection, require_bearer};
