//! Structured logging via `tracing`.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Respects `RUST_LOG`; `verbose` lowers the default to `info`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "perspectize=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // try_init: tests may install more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
