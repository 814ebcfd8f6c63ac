use tracing_subscriber::EnvFilter;

/// Setup logging of resolver events to stderr, keeping stdout for the report.
///
/// The RUST_LOG environment variable, when set, overrides `level`.
///
/// E.g. to see every query and referral:
///   RUST_LOG=dns_resolver=DEBUG
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        // A subscriber that is already installed keeps running.
        .ok();
}
