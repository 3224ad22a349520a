use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for binaries embedding this crate.
///
/// The log level is controlled through the RUST_LOG environment variable,
/// defaulting to `info`.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
