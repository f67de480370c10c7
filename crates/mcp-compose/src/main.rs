//! mcp-compose — emit the MCP server configuration for a workflow run.
//!
//! Reads `GITHUB_TOKEN` and `GITHUB_ACTION_PATH` from the environment,
//! composes the configuration document, and prints it to stdout for the
//! process launcher to consume. Logging goes to stderr so the document stays
//! clean on stdout.

use anyhow::Context;
use clap::Parser;
use tracing::error;

use mcp_compose::cli::Cli;
use mcp_compose::config::{ComposeInputs, compose_mcp_config};
use mcp_compose::logging;

fn main() {
    logging::init();
    let cli = Cli::parse();

    // Composition itself never exits; the fail-fast policy for unexpected
    // failures lives here, at the outermost caller.
    if let Err(e) = run(cli) {
        error!("Install MCP server failed with error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let github_token = std::env::var("GITHUB_TOKEN").context("GITHUB_TOKEN is not set")?;
    let action_path = std::env::var("GITHUB_ACTION_PATH").unwrap_or_default();

    let inputs = ComposeInputs {
        github_token,
        repo_owner: cli.repo_owner,
        repo_name: cli.repo_name,
        branch_name: cli.branch_name,
        action_path,
    };
    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let document = compose_mcp_config(&inputs, &dir)?;
    println!("{document}");
    Ok(())
}
