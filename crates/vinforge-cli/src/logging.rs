use tracing_subscriber::EnvFilter;

/// Initializes stderr logging, honoring `RUST_LOG` and defaulting to `info`.
pub fn init() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| err.to_string())
}
