//! Tracing setup for the CLI (logs go to stderr).

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG`. Without it, logs `warn` and above, or `debug` for
/// the sublogic crates when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "warn,sublogic_core=debug,sublogic_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
