use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber once at startup.
///
/// `RUST_LOG` controls filtering; defaults to `info` when unset.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
