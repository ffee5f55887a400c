use async_trait::async_trait;
use dnsmasq_stats_domain::{Measurement, ProbeError};

/// Receives the measurement of every successful collection cycle.
#[async_trait]
pub trait MetricsSink: Send + Sync {
    async fn emit(&self, measurement: &Measurement) -> Result<(), ProbeError>;
}
