use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs a global stderr subscriber for binaries embedding this crate.
///
/// `directive` uses `EnvFilter` syntax, e.g. `"fileio_fs=debug"`. Fails if a
/// global subscriber is already installed.
pub fn init_tracing(directive: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    debug!(directive, "Logging initialized");
    Ok(())
}
