use dnsmasq_stats_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. Logs go to stderr; stdout carries measurements.
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(false)
        .init();

    info!("Logging initialized at level: {}", config.logging.level);
}
