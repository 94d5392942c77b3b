use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber used by the binaries. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
