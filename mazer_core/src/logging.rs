//! Tracing subscriber setup shared by the binaries
//!
//! Logs go to stderr so rendered mazes on stdout stay clean. The filter comes
//! from `RUST_LOG`, falling back to the level passed in.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Safe to call more than once; later calls are ignored.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Map a `-v` count to a filter directive
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
