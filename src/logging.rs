//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing_subscriber`, keeping stdout for
//! command output (including `--json` events).
//!
//! Filter precedence:
//! 1. `RUST_LOG`
//! 2. `-v` / `-vv` on the command line (`layerform=debug` / `layerform=trace`)
//! 3. `log.filter` from config or `LAYERFORM_LOG`

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Calling this twice is harmless; the first
/// subscriber stays in place.
pub fn init_logging(config_filter: &str, verbose: u8) {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), config_filter, verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(rust_log: Option<&str>, config_filter: &str, verbose: u8) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|f| EnvFilter::try_new(f).ok()) {
        return filter;
    }

    let directive = match verbose {
        0 => config_filter,
        1 => "layerform=debug",
        _ => "layerform=trace",
    };
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}
