use super::{ReplyDecoder, StatsMessageBuilder};
use crate::dns::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use dashmap::DashMap;
use dnsmasq_stats_application::ports::StatsExchanger;
use dnsmasq_stats_domain::{ProbeError, StatQuery, StatsReply};
use rustc_hash::FxBuildHasher;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

type FlightKey = (Arc<str>, Arc<str>);

type FlightResult = Result<StatsReply, ProbeError>;

type FlightSender = Arc<watch::Sender<Option<FlightResult>>>;

type FlightMap = DashMap<FlightKey, FlightSender, FxBuildHasher>;

type FollowerRx = watch::Receiver<Option<FlightResult>>;

enum FlightRole {
    Leader(FlightLeaderGuard),
    Follower(FollowerRx),
}

/// Removes the leader's in-flight entry and wakes followers, also when the
/// leader future is dropped mid-exchange.
struct FlightLeaderGuard {
    inflight: Arc<FlightMap>,
    key: FlightKey,
    tx: FlightSender,
}

impl FlightLeaderGuard {
    fn finish(&self, result: Option<FlightResult>) {
        if let Some((_, tx)) = self
            .inflight
            .remove_if(&self.key, |_, tx| Arc::ptr_eq(tx, &self.tx))
        {
            let _ = tx.send(result);
        }
    }
}

impl Drop for FlightLeaderGuard {
    fn drop(&mut self) {
        self.finish(None);
    }
}

/// Stats exchanger over UDP with single-flight coalescing: concurrent
/// exchanges of the same question against the same server share one
/// network round trip and all observe its result.
pub struct DnsStatsExchanger {
    timeout: Duration,
    inflight: Arc<FlightMap>,
    round_trips: AtomicU64,
}

impl DnsStatsExchanger {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            inflight: Arc::new(DashMap::with_hasher(FxBuildHasher)),
            round_trips: AtomicU64::new(0),
        }
    }

    /// Network round trips started so far (coalesced callers not counted).
    pub fn round_trips(&self) -> u64 {
        self.round_trips.load(Ordering::Relaxed)
    }

    pub fn inflight_len(&self) -> usize {
        self.inflight.len()
    }

    async fn resolve_server(server: &str) -> Result<SocketAddr, ProbeError> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }

        tokio::net::lookup_host(server)
            .await
            .map_err(|e| ProbeError::Transport {
                server: server.to_string(),
                reason: format!("address lookup failed: {}", e),
            })?
            .next()
            .ok_or_else(|| ProbeError::Transport {
                server: server.to_string(),
                reason: "address lookup returned no addresses".to_string(),
            })
    }

    async fn exchange_once(&self, query: &StatQuery, server: &str) -> FlightResult {
        let addr = Self::resolve_server(server).await?;
        let message = StatsMessageBuilder::build(query)?;

        self.round_trips.fetch_add(1, Ordering::Relaxed);
        let transport = UdpTransport::new(addr);
        let response = transport.send(&message, self.timeout).await?;
        debug!(
            name = %query.name,
            addr = %transport.server_addr(),
            protocol = transport.protocol_name(),
            bytes = response.bytes.len(),
            "Stats reply received"
        );

        let got = ReplyDecoder::wire_id(&response.bytes).ok_or_else(|| {
            ProbeError::MalformedReply(format!(
                "reply from {} too short: {} bytes",
                server,
                response.bytes.len()
            ))
        })?;
        if got != query.id {
            return Err(ProbeError::IdMismatch {
                server: server.to_string(),
                expected: query.id,
                got,
            });
        }

        ReplyDecoder::decode(&response.bytes)
    }

    fn register_or_join(&self, key: &FlightKey) -> FlightRole {
        match self.inflight.entry(key.clone()) {
            dashmap::Entry::Occupied(e) => {
                let rx = e.get().subscribe();
                drop(e);
                FlightRole::Follower(rx)
            }
            dashmap::Entry::Vacant(e) => {
                let (tx, _rx) = watch::channel(None::<FlightResult>);
                let tx = Arc::new(tx);
                e.insert(Arc::clone(&tx));
                FlightRole::Leader(FlightLeaderGuard {
                    inflight: Arc::clone(&self.inflight),
                    key: key.clone(),
                    tx,
                })
            }
        }
    }

    /// Wait for the leader's result. `None` means the leader went away
    /// without one and the caller should contend for leadership again.
    async fn wait_as_follower(
        query: &StatQuery,
        server: &str,
        mut rx: FollowerRx,
    ) -> Option<FlightResult> {
        if rx.changed().await.is_err() {
            return None;
        }
        let result = rx.borrow_and_update().clone();
        if result.is_some() {
            debug!(name = %query.name, server, "Joined in-flight stats exchange");
        }
        result
    }
}

#[async_trait]
impl StatsExchanger for DnsStatsExchanger {
    async fn exchange(&self, query: &StatQuery, server: &str) -> Result<StatsReply, ProbeError> {
        let key: FlightKey = (Arc::clone(&query.name), Arc::from(server));

        loop {
            match self.register_or_join(&key) {
                FlightRole::Leader(guard) => {
                    let result = self.exchange_once(query, server).await;
                    guard.finish(Some(result.clone()));
                    return result;
                }
                FlightRole::Follower(rx) => {
                    if let Some(result) = Self::wait_as_follower(query, server, rx).await {
                        return result;
                    }
                    debug!(name = %query.name, server, "In-flight leader abandoned the exchange");
                }
            }
        }
    }
}
