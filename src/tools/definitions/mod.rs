//! Tool definitions
//!
//! This module contains the tool implementations exposed by the server.

pub mod greeting;
pub mod info;

use crate::tools::ToolRegistry;

/// Register all tools with the registry
pub fn register_all_tools(registry: &mut ToolRegistry) {
    greeting::register(registry);
    info::register(registry);
}
