//! Process-level logging initialization for the mcp-compose binary.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

fn level_from_env() -> tracing::Level {
    let raw = std::env::var("MCP_COMPOSE_LOG").unwrap_or_default();
    match raw.to_ascii_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Initialize tracing output at the level named by `MCP_COMPOSE_LOG`.
///
/// Safe to call multiple times; only the first call installs the subscriber.
/// Best-effort and never returns an error.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_from_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    let _ = INIT.set(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_level_defaults_to_info() {
        unsafe {
            env::remove_var("MCP_COMPOSE_LOG");
        }
        assert_eq!(level_from_env(), tracing::Level::INFO);
    }

    #[test]
    #[serial]
    fn test_level_parses_known_names() {
        for (name, level) in [
            ("trace", tracing::Level::TRACE),
            ("debug", tracing::Level::DEBUG),
            ("warn", tracing::Level::WARN),
            ("error", tracing::Level::ERROR),
            ("INFO", tracing::Level::INFO),
        ] {
            unsafe {
                env::set_var("MCP_COMPOSE_LOG", name);
            }
            assert_eq!(level_from_env(), level);
        }
        unsafe {
            env::remove_var("MCP_COMPOSE_LOG");
        }
    }

    #[test]
    #[serial]
    fn test_unknown_level_falls_back_to_info() {
        unsafe {
            env::set_var("MCP_COMPOSE_LOG", "chatty");
        }
        assert_eq!(level_from_env(), tracing::Level::INFO);
        unsafe {
            env::remove_var("MCP_COMPOSE_LOG");
        }
    }
}
