use tracing_subscriber::EnvFilter;

/// Route `tracing` diagnostics to stderr.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is on.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "warn,notification_icons=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
