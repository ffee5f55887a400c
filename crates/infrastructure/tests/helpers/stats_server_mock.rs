#![allow(dead_code)]
use super::wire::{build_reply, query_id, query_name, WireAnswer};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    Normal,
    WrongId,
    Garbage,
    Silent,
}

/// Records a well-behaved dnsmasq answers with.
pub fn healthy_records() -> HashMap<String, Vec<WireAnswer>> {
    let mut records = HashMap::new();
    for (name, value) in [
        ("cachesize.bind.", "150"),
        ("insertions.bind.", "3120"),
        ("evictions.bind.", "0"),
        ("misses.bind.", "4821"),
        ("hits.bind.", "5"),
        ("auth.bind.", "0"),
    ] {
        records.insert(name.to_string(), vec![WireAnswer::txt(name, &[value])]);
    }
    records.insert(
        "servers.bind.".to_string(),
        vec![WireAnswer::txt("servers.bind.", &["127.0.0.1#5353 42 1340"])],
    );
    records
}

/// UDP stats server answering CHAOS TXT queries from a fixed record table.
pub struct MockStatsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockStatsServer {
    pub async fn start(
        records: HashMap<String, Vec<WireAnswer>>,
        mode: ReplyMode,
        delay: Duration,
    ) -> Result<Self, std::io::Error> {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await?);
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let records = Arc::new(records);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let counter = Arc::clone(&received);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);

                        let query = buf[..len].to_vec();
                        let socket = Arc::clone(&socket);
                        let records = Arc::clone(&records);

                        tokio::spawn(async move {
                            let Some(response) = Self::respond(&query, &records, mode) else {
                                return;
                            };
                            if !delay.is_zero() {
                                tokio::time::sleep(delay).await;
                            }
                            let _ = socket.send_to(&response, peer).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn healthy() -> Self {
        Self::start(healthy_records(), ReplyMode::Normal, Duration::ZERO)
            .await
            .unwrap()
    }

    fn respond(
        query: &[u8],
        records: &HashMap<String, Vec<WireAnswer>>,
        mode: ReplyMode,
    ) -> Option<Vec<u8>> {
        let id = query_id(query)?;
        let name = query_name(query)?;
        let answers = records.get(&name).cloned().unwrap_or_default();

        match mode {
            ReplyMode::Normal => Some(build_reply(query, id, &answers)),
            ReplyMode::WrongId => Some(build_reply(query, id.wrapping_add(1), &answers)),
            ReplyMode::Garbage => {
                // Header announcing five answers, followed by junk
                let mut bytes = id.to_be_bytes().to_vec();
                bytes.extend_from_slice(&[
                    0x81, 0x80, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00,
                ]);
                bytes.extend_from_slice(&[0xff; 7]);
                Some(bytes)
            }
            ReplyMode::Silent => None,
        }
    }

    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }
}

impl Drop for MockStatsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
