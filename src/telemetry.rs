use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout only carries the run's own output.
/// `RUST_LOG` selects the level, `warn` when unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
