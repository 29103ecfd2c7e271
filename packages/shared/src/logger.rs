//! Logger setup shared by every Innkeeper binary.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise both the binary named `name` and the
/// `innkeeper` library log at `default_level`.
///
/// Logs go to stderr so that stdout stays reserved for command results.
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},innkeeper={}",
            name.replace('-', "_"),
            default_level,
            default_level
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
