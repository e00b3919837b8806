use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber used by every session binary.
///
/// `RUST_LOG` overrides the default `warn` level, so demo output on stdout
/// stays clean unless diagnostics are asked for.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
