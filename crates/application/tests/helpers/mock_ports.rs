#![allow(dead_code)]

use async_trait::async_trait;
use dnsmasq_stats_application::ports::{HostnameProvider, MetricsSink, StatsExchanger};
use dnsmasq_stats_domain::{
    Measurement, ProbeError, ReplyAnswer, StatName, StatQuery, StatsReply,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockStatsExchanger {
    replies: Mutex<HashMap<String, Result<StatsReply, ProbeError>>>,
    queried: Mutex<Vec<(String, String)>>,
}

impl MockStatsExchanger {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// A resolver answering every stats record with well-formed values.
    pub fn healthy() -> Self {
        let mock = Self::new();
        mock.set_txt(StatName::CacheSize, &["150"]);
        mock.set_txt(StatName::Insertions, &["3120"]);
        mock.set_txt(StatName::Evictions, &["0"]);
        mock.set_txt(StatName::Misses, &["4821"]);
        mock.set_txt(StatName::Hits, &["5"]);
        mock.set_txt(StatName::Auth, &["0"]);
        mock.set_txt(StatName::Servers, &["127.0.0.1#5353 42 1340"]);
        mock
    }

    pub fn set_txt(&self, stat: StatName, strings: &[&str]) {
        self.set_reply(
            stat,
            StatsReply {
                id: 0,
                answers: vec![ReplyAnswer::txt(stat.as_str(), strings)],
            },
        );
    }

    pub fn set_reply(&self, stat: StatName, reply: StatsReply) {
        self.replies
            .lock()
            .unwrap()
            .insert(stat.as_str().to_string(), Ok(reply));
    }

    pub fn set_error(&self, stat: StatName, error: ProbeError) {
        self.replies
            .lock()
            .unwrap()
            .insert(stat.as_str().to_string(), Err(error));
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.queried
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn queried_servers(&self) -> Vec<String> {
        self.queried
            .lock()
            .unwrap()
            .iter()
            .map(|(_, server)| server.clone())
            .collect()
    }
}

#[async_trait]
impl StatsExchanger for MockStatsExchanger {
    async fn exchange(&self, query: &StatQuery, server: &str) -> Result<StatsReply, ProbeError> {
        self.queried
            .lock()
            .unwrap()
            .push((query.name.to_string(), server.to_string()));

        match self.replies.lock().unwrap().get(&*query.name) {
            Some(Ok(reply)) => Ok(StatsReply {
                id: query.id,
                answers: reply.answers.clone(),
            }),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(StatsReply {
                id: query.id,
                answers: vec![],
            }),
        }
    }
}

pub struct MockMetricsSink {
    emitted: Mutex<Vec<Measurement>>,
    call_count: Arc<AtomicU64>,
    should_fail: Mutex<bool>,
}

impl MockMetricsSink {
    pub fn new() -> Self {
        Self {
            emitted: Mutex::new(Vec::new()),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Mutex::new(false),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn emitted(&self) -> Vec<Measurement> {
        self.emitted.lock().unwrap().clone()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }
}

#[async_trait]
impl MetricsSink for MockMetricsSink {
    async fn emit(&self, measurement: &Measurement) -> Result<(), ProbeError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.lock().unwrap() {
            return Err(ProbeError::Sink("sink unavailable".to_string()));
        }
        self.emitted.lock().unwrap().push(measurement.clone());
        Ok(())
    }
}

pub struct MockHostnameProvider {
    result: Result<String, ProbeError>,
}

impl MockHostnameProvider {
    pub fn new(hostname: &str) -> Self {
        Self {
            result: Ok(hostname.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(ProbeError::HostLookup("uname failed".to_string())),
        }
    }
}

impl HostnameProvider for MockHostnameProvider {
    fn hostname(&self) -> Result<String, ProbeError> {
        self.result.clone()
    }
}
