use std::io::stderr;

use crate::DEFAULT_LOG_FILTER;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Diagnostics go to stderr so stdout carries only the benchmark report.
/// The filter comes from `RUST_LOG`, falling back to `DEFAULT_LOG_FILTER`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() -> () {
    let filter: EnvFilter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(stderr).with_target(false).try_init();
}
