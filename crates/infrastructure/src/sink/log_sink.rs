use async_trait::async_trait;
use dnsmasq_stats_application::ports::MetricsSink;
use dnsmasq_stats_domain::{Measurement, ProbeError};
use tracing::info;

/// Reports measurements as structured log events.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl MetricsSink for LogSink {
    async fn emit(&self, measurement: &Measurement) -> Result<(), ProbeError> {
        info!(
            measurement = measurement.name,
            fields = ?measurement.fields,
            tags = ?measurement.tags,
            "Measurement collected"
        );
        Ok(())
    }
}
