//! Document types for the MCP server configuration.
//!
//! [`McpConfig`] is the unit of input (the `.mcp.json` override file) and
//! output (the serialized document handed to the process launcher). Server
//! entries inside a [`ServerSet`] are kept as raw JSON values so fields this
//! component does not inspect pass through a merge untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from server name to its entry, in insertion order.
///
/// `serde_json` is built with `preserve_order`, so the order entries are
/// inserted during a merge is the order they serialize in.
pub type ServerSet = Map<String, Value>;

/// A single tool-server launch specification.
///
/// `args` is the literal command line, in order. `env` maps environment
/// variable names to values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpServerConfig {
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub env: Map<String, Value>,
}

/// The full configuration document.
///
/// Unknown top-level fields in an override file are ignored, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: ServerSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_args_and_env_default_when_absent() {
        let entry: McpServerConfig = serde_json::from_str(r#"{"command": "foo"}"#).unwrap();
        assert_eq!(entry.command, "foo");
        assert!(entry.args.is_empty());
        assert!(entry.env.is_empty());
    }

    #[test]
    fn test_document_ignores_unknown_top_level_fields() {
        let doc: McpConfig =
            serde_json::from_str(r#"{"mcpServers": {}, "version": 2}"#).unwrap();
        assert!(doc.mcp_servers.is_empty());
    }

    #[test]
    fn test_document_wire_field_name() {
        let doc = McpConfig {
            mcp_servers: ServerSet::new(),
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"mcpServers":{}}"#);
    }
}
