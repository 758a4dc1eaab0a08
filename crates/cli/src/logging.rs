use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays a clean answer for build scripts.
/// `RUST_LOG` overrides the verbosity flag.
pub fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "bnplug_core=debug,bnplug_cli=debug,warn"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();
}
