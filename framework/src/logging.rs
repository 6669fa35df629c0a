//! Diagnostic tracing for envkit binaries
//!
//! Library code emits `tracing` events only. Binaries call [`init`] once at
//! startup; output goes to stderr so stdout stays clean for command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// Reads `RUST_LOG`, defaulting to `warn`. Calling it twice is a no-op.
///
/// ```bash
/// RUST_LOG=envkit=debug envkit env
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
