//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). dnsmasq's stats replies are a few
//! dozen bytes, well under the classic 512-byte limit.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsmasq_stats_domain::ProbeError;
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn transport_error(&self, action: &str, e: std::io::Error) -> ProbeError {
        let reason = match e.kind() {
            ErrorKind::ConnectionRefused => "connection refused".to_string(),
            _ => format!("{} failed: {}", action, e),
        };
        ProbeError::Transport {
            server: self.server_addr.to_string(),
            reason,
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ProbeError> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error("bind", e))?;

        // Connected socket: ICMP port-unreachable surfaces as ConnectionRefused
        // and datagrams from other sources are dropped by the kernel.
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.transport_error("connect", e))?;

        let timed_out = || ProbeError::Timeout {
            server: self.server_addr.to_string(),
        };

        let bytes_sent = tokio::time::timeout(timeout, socket.send(message_bytes))
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| self.transport_error("send", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| self.transport_error("receive", e))?;

        if bytes_received == MAX_UDP_RESPONSE_SIZE {
            warn!(
                server = %self.server_addr,
                "UDP response filled the receive buffer and may be cut short"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse { bytes: recv_buf })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
