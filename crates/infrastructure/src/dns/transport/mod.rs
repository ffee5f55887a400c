pub mod udp;

use async_trait::async_trait;
use dnsmasq_stats_domain::ProbeError;
use std::time::Duration;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ProbeError>;

    fn protocol_name(&self) -> &'static str;
}
