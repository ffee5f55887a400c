mod hostname_provider;
mod metrics_sink;
mod stats_exchanger;

pub use hostname_provider::HostnameProvider;
pub use metrics_sink::MetricsSink;
pub use stats_exchanger::StatsExchanger;
