//! Diagnostic logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Variable holding the tracing filter directives.
pub const LOG_VAR: &str = "RUNALONE_LOG";

/// Install a stderr subscriber filtered by `RUNALONE_LOG` (default `warn`).
///
/// A subscriber that is already installed is left in place.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
