use tracing_subscriber::EnvFilter;

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG` wins over `verbosity`; otherwise 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("devstack={}", default_level)));

    // A second install (tests calling into the CLI) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
