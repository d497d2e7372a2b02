//! Log subscriber setup for binaries.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Installs a `fmt` subscriber writing to stderr, filtered by `RUST_LOG`
/// (default `info`).
///
/// Stdout is left alone for interactive output.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
}
