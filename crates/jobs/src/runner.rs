use crate::StatsCollectionJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct JobRunner {
    stats_collection: Option<StatsCollectionJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            stats_collection: None,
            shutdown: None,
        }
    }

    pub fn with_stats_collection(mut self, job: StatsCollectionJob) -> Self {
        self.stats_collection = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Spawn every configured job. The handles resolve once the jobs have
    /// observed the shutdown token.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();

        if let Some(job) = self.stats_collection {
            let job = match &self.shutdown {
                Some(token) => job.with_cancellation(token.clone()),
                None => job,
            };
            let job = Arc::new(job);
            handles.push(tokio::spawn(async move { job.start().await }));
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
