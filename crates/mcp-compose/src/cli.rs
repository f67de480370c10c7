//! CLI argument types for mcp-compose.

use clap::Parser;
use std::path::PathBuf;

/// Compose the MCP server configuration document for a workflow run.
///
/// The access token is read from `GITHUB_TOKEN` rather than taken as a flag
/// so it never appears in argv or shell history.
#[derive(Parser, Debug)]
#[command(name = "mcp-compose", version, about)]
pub struct Cli {
    /// Repository owner (user or organization)
    #[arg(long)]
    pub repo_owner: String,

    /// Repository name
    #[arg(long)]
    pub repo_name: String,

    /// Branch the workflow operates on
    #[arg(long)]
    pub branch_name: String,

    /// Directory searched for .mcp.json (default: current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}
