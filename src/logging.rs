//! Logging setup on top of `tracing` / `tracing-subscriber`.
//!
//! The filter is read from `RUST_LOG` (default `warn`), e.g.
//! `RUST_LOG=rshiftplan=debug rshiftplan plan 2025-09-01 --setup 60 --production 900`
//! prints every day advance of the projection. Output goes to stderr so it
//! never mixes with the command output.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Verbose logging captured by the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("rshiftplan=trace"))
        .with_test_writer()
        .try_init();
}
