//! Log setup for the command line tool.
//!
//! Logs go to stderr so they never mix with reports on stdout.

use std::io;

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `-v` flags take precedence over `RUST_LOG`; with neither, only warnings
/// and errors are shown.
pub fn init(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new(level_for(verbose))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
