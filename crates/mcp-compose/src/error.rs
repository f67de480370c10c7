//! Error types for configuration composition.

use thiserror::Error;

/// Failures that abort composition.
///
/// Problems with the optional `.mcp.json` override never surface here; they
/// are handled inside the composer and degrade to the baseline-only
/// document. These variants cover the unexpected failures the surrounding
/// workflow cannot proceed past — the outermost caller decides whether to
/// terminate the process.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// The action installation directory was not supplied.
    #[error("action installation directory (GITHUB_ACTION_PATH) is not set; cannot locate the file-ops server script")]
    MissingActionPath,

    /// Serializing the configuration document failed.
    #[error("failed to serialize MCP configuration: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}
