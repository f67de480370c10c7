//! mcp-compose library crate.
//!
//! Builds the runtime MCP (tool-server) configuration document for an agent
//! workflow run: a fixed baseline of required servers merged with an optional
//! user-authored `.mcp.json` override, serialized as JSON for the downstream
//! process launcher. Exposed as a library for the `mcp-compose` binary and
//! for integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

#[doc(inline)]
pub use config::{ComposeInputs, compose_mcp_config};
#[doc(inline)]
pub use error::ComposeError;
