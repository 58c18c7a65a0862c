//! Tracing setup shared by the binary and anything embedding the store.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Verbosity follows `RUST_LOG` (default `info`), e.g.
/// `RUST_LOG=dashboard_store::actors=debug` to see every request.
pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
