//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`; user-facing messages go
//! through `cli::output` instead. The filter comes from `PASSVAULT_LOG`
//! when set.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PASSVAULT_LOG";

pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "passvault=debug"
    } else {
        "passvault=warn"
    };

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
