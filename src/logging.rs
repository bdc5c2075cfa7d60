//! Tracing setup for the command-line front end
//!
//! Configure via RUST_LOG:
//! - `RUST_LOG=debug` - every pass the highlighter schedules and runs
//! - `RUST_LOG=sage_highlight::controller=trace` - discarded notifications

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize a stderr subscriber, `warn` unless RUST_LOG says otherwise
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
