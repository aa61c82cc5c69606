pub mod fixtures;

/// Install a subscriber so debug-level rejection logs show up under
/// RUST_LOG during test runs. Safe to call from multiple tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
