use dnsmasq_stats_application::ports::MetricsSink;
use dnsmasq_stats_application::use_cases::CollectStatsUseCase;
use dnsmasq_stats_domain::{EffectiveConfig, OutputFormat};
use dnsmasq_stats_infrastructure::dns::DnsStatsExchanger;
use dnsmasq_stats_infrastructure::sink::{LineProtocolSink, LogSink};
use dnsmasq_stats_infrastructure::system::SystemHostnameProvider;
use std::sync::Arc;

fn build_sink(format: OutputFormat) -> Arc<dyn MetricsSink> {
    match format {
        OutputFormat::Line => Arc::new(LineProtocolSink::stdout()),
        OutputFormat::Log => Arc::new(LogSink),
    }
}

pub fn build_collector(config: &EffectiveConfig, format: OutputFormat) -> Arc<CollectStatsUseCase> {
    let exchanger = Arc::new(DnsStatsExchanger::new(config.timeout));
    let hostname = Arc::new(SystemHostnameProvider::new());

    Arc::new(CollectStatsUseCase::new(
        exchanger,
        build_sink(format),
        hostname,
        config.clone(),
    ))
}
