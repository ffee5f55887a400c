use async_trait::async_trait;
use dnsmasq_stats_domain::{ProbeError, StatQuery, StatsReply};

/// One request/response exchange with the resolver's statistics interface.
///
/// Implementations coalesce identical in-flight queries so that racing
/// callers share a single network round trip and observe the same result.
#[async_trait]
pub trait StatsExchanger: Send + Sync {
    async fn exchange(&self, query: &StatQuery, server: &str) -> Result<StatsReply, ProbeError>;
}
