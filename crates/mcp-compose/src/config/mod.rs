//! MCP configuration composition.
//!
//! The entry point is [`compose_mcp_config`], which builds the baseline
//! server set from call-time inputs, merges an optional `.mcp.json` override
//! found in the working directory, and serializes the result.
//!
//! See [`compose`] for the merge/precedence contract and [`types`] for the
//! document types.

mod compose;
mod types;

pub use compose::{ComposeInputs, MCP_CONFIG_FILE, compose_mcp_config};
pub use types::{McpConfig, McpServerConfig, ServerSet};
