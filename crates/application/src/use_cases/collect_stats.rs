use crate::ports::{HostnameProvider, MetricsSink, StatsExchanger};
use crate::services::ResponseParser;
use dnsmasq_stats_domain::{
    EffectiveConfig, FieldMap, Measurement, ProbeError, StatName, StatQuery, Tags,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Summary of a completed cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionOutcome {
    pub queries_sent: usize,
    pub fields_collected: usize,
    pub elapsed: Duration,
}

/// One collection cycle: query every stats record in order, parse the
/// replies into one field map and hand it to the sink.
///
/// Any failure aborts the cycle before the sink is called.
pub struct CollectStatsUseCase {
    exchanger: Arc<dyn StatsExchanger>,
    sink: Arc<dyn MetricsSink>,
    hostname: Arc<dyn HostnameProvider>,
    config: EffectiveConfig,
}

impl CollectStatsUseCase {
    pub fn new(
        exchanger: Arc<dyn StatsExchanger>,
        sink: Arc<dyn MetricsSink>,
        hostname: Arc<dyn HostnameProvider>,
        config: EffectiveConfig,
    ) -> Self {
        Self {
            exchanger,
            sink,
            hostname,
            config,
        }
    }

    pub fn server(&self) -> &str {
        &self.config.server
    }

    pub async fn execute(&self) -> Result<CollectionOutcome, ProbeError> {
        let started = Instant::now();
        let tags = self.build_tags()?;
        let mut fields = FieldMap::new();

        for stat in StatName::ALL {
            let query = StatQuery::for_stat(stat);
            debug!(stat = %stat, id = query.id, server = %self.config.server, "Querying stats record");

            let reply = self
                .exchanger
                .exchange(&query, &self.config.server)
                .await
                .inspect_err(|e| warn!(stat = %stat, error = %e, "Stats exchange failed"))?;

            ResponseParser::merge(&reply, stat, &mut fields)
                .inspect_err(|e| warn!(stat = %stat, error = %e, "Stats reply rejected"))?;
        }

        let measurement = Measurement::new(fields, tags);
        self.sink.emit(&measurement).await?;

        Ok(CollectionOutcome {
            queries_sent: StatName::ALL.len(),
            fields_collected: measurement.fields.len(),
            elapsed: started.elapsed(),
        })
    }

    fn build_tags(&self) -> Result<Tags, ProbeError> {
        let hostname = self.hostname.hostname()?;

        let mut tags = Tags::new();
        tags.insert("server".to_string(), self.config.server.clone());
        tags.insert("host".to_string(), short_host(&hostname).to_string());
        Ok(tags)
    }
}

/// Host identifier used as the `host` tag: everything before the first dot.
pub fn short_host(hostname: &str) -> &str {
    hostname.split('.').next().unwrap_or(hostname)
}
