use dnsmasq_stats_application::use_cases::CollectStatsUseCase;
use dnsmasq_stats_domain::ResultType;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_INTERVAL_SECS: u64 = 10;

/// Runs one collection cycle per tick until cancelled. A failed cycle is
/// logged and the next tick proceeds as usual.
pub struct StatsCollectionJob {
    collect: Arc<CollectStatsUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl StatsCollectionJob {
    pub fn new(collect: Arc<CollectStatsUseCase>) -> Self {
        Self {
            collect,
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
            succeeded: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn cycles_succeeded(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn cycles_failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            server = %self.collect.server(),
            interval_secs = self.interval.as_secs_f64(),
            "Starting stats collection job"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("StatsCollectionJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    self.run_cycle().await;
                }
            }
        }
    }

    /// One cycle with outcome bookkeeping. Returns whether it succeeded.
    pub async fn run_cycle(&self) -> bool {
        let result = self.collect.execute().await;
        let result_type = ResultType::from(&result);

        match result {
            Ok(outcome) => {
                self.succeeded.fetch_add(1, Ordering::Relaxed);
                info!(
                    server = %self.collect.server(),
                    fields = outcome.fields_collected,
                    elapsed_ms = outcome.elapsed.as_millis() as u64,
                    result = result_type.as_str(),
                    "Stats collection cycle completed"
                );
                true
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                error!(
                    server = %self.collect.server(),
                    error = %e,
                    category = e.category(),
                    result = result_type.as_str(),
                    "Stats collection cycle failed"
                );
                false
            }
        }
    }
}
