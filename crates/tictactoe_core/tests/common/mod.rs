//! Shared test helpers.

use tracing_subscriber::EnvFilter;

/// Installs a `RUST_LOG`-filtered subscriber that writes through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
