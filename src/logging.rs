//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing-subscriber` so stdout stays
//! reserved for transcript lines.

use tracing_subscriber::{fmt, EnvFilter};

/// Env var consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "FILPLORER_LOG";

/// Default directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Pick the filter directive: `FILPLORER_LOG`, then `RUST_LOG`, then the
/// verbosity default. Blank values fall through.
pub fn filter_directive<FEnv>(verbosity: u8, env_lookup: FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    [LOG_ENV_VAR, EnvFilter::DEFAULT_ENV]
        .iter()
        .filter_map(|name| env_lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| default_directive(verbosity).to_string())
}

/// Install the global subscriber. Calling twice is an error.
pub fn init_logging(verbosity: u8) -> Result<(), String> {
    let directive = filter_directive(verbosity, |name| std::env::var(name).ok());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_default_level() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "debug");
    }

    #[test]
    fn app_env_var_wins_over_rust_log() {
        let directive = filter_directive(0, |name| match name {
            "FILPLORER_LOG" => Some("filplorer=trace".to_string()),
            "RUST_LOG" => Some("error".to_string()),
            _ => None,
        });
        assert_eq!(directive, "filplorer=trace");
    }

    #[test]
    fn blank_env_falls_back_to_verbosity() {
        let directive = filter_directive(1, |name| match name {
            "FILPLORER_LOG" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(directive, "info");
    }
}
