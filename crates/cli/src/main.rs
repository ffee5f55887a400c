use clap::Parser;
use dnsmasq_stats_domain::{CliOverrides, OutputFormat, SAMPLE_CONFIG};
use dnsmasq_stats_jobs::{JobRunner, StatsCollectionJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dnsmasq-stats")]
#[command(version)]
#[command(about = "Collects dnsmasq cache statistics over CHAOS TXT queries")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// dnsmasq server address (host:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Seconds between collection cycles
    #[arg(short = 'i', long)]
    interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Measurement output: line or log
    #[arg(short = 'o', long)]
    output: Option<OutputFormat>,

    /// Run a single cycle and exit
    #[arg(long)]
    once: bool,

    /// Print a sample configuration file and exit
    #[arg(long)]
    sample_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.sample_config {
        print!("{}", SAMPLE_CONFIG);
        return Ok(());
    }

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        interval_secs: cli.interval,
        output_format: cli.output,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let effective = config.resolve();
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        server = %effective.server,
        interval_secs = effective.interval.as_secs(),
        timeout_ms = effective.timeout.as_millis() as u64,
        output = config.output.format.as_str(),
        "Configuration loaded"
    );

    let collector = di::build_collector(&effective, config.output.format);

    if cli.once {
        let outcome = collector.execute().await.inspect_err(|e| {
            error!(server = %effective.server, error = %e, "Stats collection failed");
        })?;
        info!(
            fields = outcome.fields_collected,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "Stats collection completed"
        );
        return Ok(());
    }

    let shutdown = CancellationToken::new();
    let job = StatsCollectionJob::new(collector).with_interval(effective.interval);
    let handles = JobRunner::new()
        .with_stats_collection(job)
        .with_shutdown_token(shutdown.clone())
        .start();

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    shutdown.cancel();

    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Job task ended abnormally");
        }
    }

    info!("dnsmasq-stats stopped");
    Ok(())
}
