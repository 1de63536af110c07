//! Development-time tracing for the katabox binary.
//!
//! Reads `RUST_LOG`, defaulting to `warn` if unset. Output goes to stderr in
//! compact format and never mixes with result printing on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
