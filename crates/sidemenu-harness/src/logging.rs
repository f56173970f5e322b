#![forbid(unsafe_code)]

//! Tracing setup for tests.
//!
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=sidemenu_core=trace cargo test`.
//! Output goes through the libtest writer so it is captured per test.

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber once. Later calls are no-ops.
pub fn init_test_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sidemenu_core=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init();
}
