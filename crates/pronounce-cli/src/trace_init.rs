// Tracing subscriber setup for the CLI binaries.
//
// Events go to stderr so they never mix with the tools' stdout output.
// The filter is read from PRONOUNCE_LOG (EnvFilter syntax) and defaults
// to "warn", which surfaces skipped word list entries and nothing else.

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PRONOUNCE_LOG";

#[cfg(feature = "trace")]
pub fn init_tracing() {
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
