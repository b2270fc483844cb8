use std::io;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber for the binaries
///
/// `RUST_LOG` wins over `verbose` when set.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    // Ignore the error when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .try_init();
}
