use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info,search_service=debug";

/// Installs a fmt subscriber filtered by `RUST_LOG`, or [`DEFAULT_LOG_FILTER`].
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}
