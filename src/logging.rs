use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialise the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` is used as the
/// [`EnvFilter`] directive, falling back to `"info"` if it does not parse.
/// Everything goes to stderr so it never mixes with the interactive output.
pub fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.to_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    // try_init: an already-installed subscriber stays in place
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
