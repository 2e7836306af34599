// Logging setup.
// Diagnostics go to stderr so stdout carries only rendered results.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when RUST_LOG is not set.
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,gpsearch=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber.
///
/// RUST_LOG takes precedence over the verbosity flag. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
