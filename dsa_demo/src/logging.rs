//! Tracing setup for `dsa_demo`.
//!
//! The binary logs which topic and output format were chosen and how many
//! entries each report produced. Those events go to stderr, so piping the
//! `--format json` report from stdout into another tool stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset or invalid.
///
/// ```bash
/// RUST_LOG=dsa_demo=debug dsa_demo all
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
