//! Logging init: diagnostics on stderr, generated candidates stay on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Stdout is reserved for generated candidate URLs so the output can be
/// piped straight into a fetcher; every diagnostic (skips, failures, config
/// notices) goes through tracing to stderr instead.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,undust_core=debug,undust_cli=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
