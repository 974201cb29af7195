use anyhow::Context;
use resolvd_domain::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. A configured log file that cannot
/// be opened is a startup failure.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match &config.logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Could not open log file {path}"))?;
            builder.with_ansi(false).with_writer(Arc::new(file)).init();
        }
        None => builder.init(),
    }

    info!(level = %config.logging.level, "Logging initialized");
    Ok(())
}
