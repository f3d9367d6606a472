//! Tracing setup for the `sqrr` binary
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs, including every embed transition
//! - `RUST_LOG=app_core::selector=debug` - selector only
//!
//! Logs go to stderr so stdout carries only rendered JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from RUST_LOG, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
pub fn init() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        .init();
}
