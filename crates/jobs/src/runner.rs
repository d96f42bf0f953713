use crate::ExpirySweepJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct JobRunner {
    expiry_sweep: Option<ExpirySweepJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            expiry_sweep: None,
            shutdown: None,
        }
    }

    pub fn with_expiry_sweep(mut self, job: ExpirySweepJob) -> Self {
        self.expiry_sweep = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.expiry_sweep {
            let job = match self.shutdown {
                Some(token) => job.with_cancellation(token),
                None => job,
            };
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
