//! Tracing setup for embedding applications.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, filtered by `RUST_LOG` with a
/// quiet default. Safe to call once per process; embedders that install
/// their own subscriber should skip this.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("brandboard=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
