//! Diagnostic logging to stderr.
//!
//! Level defaults to `warn`; `--verbose` raises it to `debug`. `GICM_LOG`
//! takes an EnvFilter directive string and overrides both.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GICM_LOG";

/// Build the filter for the given verbosity
pub fn filter(verbose: bool) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
        eprintln!("Warning: ignoring invalid {} value '{}'", LOG_ENV, directives);
    }

    EnvFilter::new(if verbose { "gicm=debug" } else { "warn" })
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// usable for command output.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
