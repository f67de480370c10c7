//! Builds the MCP server configuration document for a workflow run.
//!
//! Composition combines two sources with strict precedence:
//!
//! 1. The baseline server set (`github`, `github_file_ops`), constructed
//!    fresh from call-time inputs on every invocation. Always present, never
//!    overridable.
//! 2. An optional user-authored `.mcp.json` in the working directory. Its
//!    entries are carried through unchanged unless their name collides with a
//!    baseline entry, in which case the baseline entry wins whole-entry.
//!
//! Any problem with the override file (missing, unreadable, unparseable,
//! wrong shape) degrades to the baseline-only document with a logged note or
//! warning; it never fails composition. Only unexpected internal failures
//! return an error, and the caller — not this module — decides whether that
//! terminates the process.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::types::{McpConfig, McpServerConfig, ServerSet};
use crate::error::ComposeError;

/// File name searched for in the working directory.
pub const MCP_CONFIG_FILE: &str = ".mcp.json";

/// Pinned image for the `github` tool server.
const GITHUB_MCP_IMAGE: &str = "ghcr.io/anthropics/github-mcp-server:sha-7382253";

/// Path of the file-ops server script, relative to the action directory.
const FILE_OPS_SERVER_SCRIPT: &str = "src/mcp/github-file-ops-server.ts";

/// Call-time inputs for [`compose_mcp_config`].
///
/// The four identity strings are opaque and embedded verbatim into the
/// baseline entries' environment maps. `github_token` is a secret and is
/// never logged by this module.
#[derive(Debug, Clone)]
pub struct ComposeInputs {
    pub github_token: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub branch_name: String,
    /// Action installation directory, normally `GITHUB_ACTION_PATH`.
    pub action_path: String,
}

/// Result of shape-checking a parsed override document.
enum ExternalConfig {
    Valid(ServerSet),
    Invalid(String),
}

/// Compose the final MCP configuration document.
///
/// Builds the baseline set from `inputs`, merges `<dir>/.mcp.json` if one is
/// present and well-formed, and returns the document serialized as
/// two-space-indented JSON with stable key order (override entries in file
/// order, baseline entries overlaid on top).
///
/// # Errors
///
/// Returns [`ComposeError::MissingActionPath`] when `inputs.action_path` is
/// empty, or [`ComposeError::Serialize`] if the document cannot be
/// serialized. Override-file problems are not errors; they degrade to the
/// baseline-only document.
pub fn compose_mcp_config(inputs: &ComposeInputs, dir: &Path) -> Result<String, ComposeError> {
    let baseline = baseline_servers(inputs)?;

    let servers = match load_external_servers(dir) {
        Some(external) => {
            let merged = merge_servers(external, baseline);
            info!("Successfully merged {MCP_CONFIG_FILE} configuration.");
            merged
        }
        None => baseline,
    };

    let document = McpConfig {
        mcp_servers: servers,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Build the two baseline entries every run requires.
fn baseline_servers(inputs: &ComposeInputs) -> Result<ServerSet, ComposeError> {
    if inputs.action_path.is_empty() {
        return Err(ComposeError::MissingActionPath);
    }

    let mut github_env = Map::new();
    github_env.insert(
        "GITHUB_PERSONAL_ACCESS_TOKEN".to_string(),
        Value::String(inputs.github_token.clone()),
    );
    let github = McpServerConfig {
        command: "docker".to_string(),
        args: vec![
            "run".to_string(),
            "-i".to_string(),
            "--rm".to_string(),
            "-e".to_string(),
            "GITHUB_PERSONAL_ACCESS_TOKEN".to_string(),
            GITHUB_MCP_IMAGE.to_string(),
        ],
        env: github_env,
    };

    let mut file_ops_env = Map::new();
    file_ops_env.insert(
        "GITHUB_TOKEN".to_string(),
        Value::String(inputs.github_token.clone()),
    );
    file_ops_env.insert(
        "REPO_OWNER".to_string(),
        Value::String(inputs.repo_owner.clone()),
    );
    file_ops_env.insert(
        "REPO_NAME".to_string(),
        Value::String(inputs.repo_name.clone()),
    );
    file_ops_env.insert(
        "BRANCH_NAME".to_string(),
        Value::String(inputs.branch_name.clone()),
    );
    let file_ops = McpServerConfig {
        command: "bun".to_string(),
        args: vec![
            "run".to_string(),
            format!("{}/{FILE_OPS_SERVER_SCRIPT}", inputs.action_path),
        ],
        env: file_ops_env,
    };

    let mut servers = ServerSet::new();
    servers.insert("github".to_string(), serde_json::to_value(github)?);
    servers.insert("github_file_ops".to_string(), serde_json::to_value(file_ops)?);
    Ok(servers)
}

/// Load and shape-check the override file, if any.
///
/// Returns `None` on every degraded path (absent, unreadable, unparseable,
/// wrong shape) after logging; callers fall back to the baseline set.
fn load_external_servers(dir: &Path) -> Option<ServerSet> {
    let path = dir.join(MCP_CONFIG_FILE);
    if !path.exists() {
        info!("{MCP_CONFIG_FILE} not found. Using default MCP configuration.");
        return None;
    }

    info!(
        "Found {MCP_CONFIG_FILE} at {}. Attempting to merge.",
        path.display()
    );
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Error reading {MCP_CONFIG_FILE}: {e}. Using default MCP configuration.");
            return None;
        }
    };
    let parsed: Value = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Error parsing {MCP_CONFIG_FILE}: {e}. Using default MCP configuration.");
            return None;
        }
    };

    match validate_external(&parsed) {
        ExternalConfig::Valid(servers) => Some(servers),
        ExternalConfig::Invalid(reason) => {
            warn!("{MCP_CONFIG_FILE} found but {reason}. Using default MCP configuration.");
            None
        }
    }
}

/// Shape-check a parsed override document.
///
/// The only requirement is a top-level `mcpServers` field holding a JSON
/// object. Other top-level fields are ignored, and entries are not validated
/// beyond being carried as-is.
fn validate_external(document: &Value) -> ExternalConfig {
    match document.get("mcpServers") {
        Some(Value::Object(servers)) => ExternalConfig::Valid(servers.clone()),
        Some(_) | None => {
            ExternalConfig::Invalid("does not contain a valid 'mcpServers' object".to_string())
        }
    }
}

/// Merge the two sets with whole-entry baseline precedence.
///
/// Two-pass construction: start from the external entries in file order, then
/// insert baseline entries by name, replacing any colliding external entry in
/// full.
fn merge_servers(external: ServerSet, baseline: ServerSet) -> ServerSet {
    let mut merged = external;
    for (name, entry) in baseline {
        merged.insert(name, entry);
    }
    merged
}
